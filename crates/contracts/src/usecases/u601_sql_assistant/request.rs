use serde::{Deserialize, Serialize};

/// Параметры подключения к базе данных.
///
/// Все значения передаются строками как есть, валидации на клиенте нет.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParams {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: String,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            password: String::new(),
            database: String::new(),
            port: String::new(),
        }
    }
}

impl ConnectionParams {
    pub fn get(&self, field: ConnectionField) -> &str {
        match field {
            ConnectionField::Host => &self.host,
            ConnectionField::User => &self.user,
            ConnectionField::Password => &self.password,
            ConnectionField::Database => &self.database,
            ConnectionField::Port => &self.port,
        }
    }

    /// Заменить значение одного поля, остальные не трогаются
    pub fn set(&mut self, field: ConnectionField, value: String) {
        let slot = match field {
            ConnectionField::Host => &mut self.host,
            ConnectionField::User => &mut self.user,
            ConnectionField::Password => &mut self.password,
            ConnectionField::Database => &mut self.database,
            ConnectionField::Port => &mut self.port,
        };
        *slot = value;
    }
}

/// Поле формы подключения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionField {
    Host,
    User,
    Password,
    Database,
    Port,
}

impl ConnectionField {
    /// Порядок полей в форме
    pub const ALL: [ConnectionField; 5] = [
        ConnectionField::Host,
        ConnectionField::User,
        ConnectionField::Password,
        ConnectionField::Database,
        ConnectionField::Port,
    ];

    /// Ключ поля в JSON
    pub fn key(&self) -> &'static str {
        match self {
            ConnectionField::Host => "host",
            ConnectionField::User => "user",
            ConnectionField::Password => "password",
            ConnectionField::Database => "database",
            ConnectionField::Port => "port",
        }
    }

    pub fn placeholder(&self) -> String {
        self.key().to_uppercase()
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, ConnectionField::Password)
    }
}

/// Запрос на перевод и выполнение запроса на естественном языке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}
