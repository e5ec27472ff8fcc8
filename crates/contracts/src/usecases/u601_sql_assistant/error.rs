use thiserror::Error;

/// Ошибки взаимодействия с сервисом-ассистентом.
///
/// `Display` выводит только сообщение; префикс ("Connection failed: ",
/// "Query failed : ") добавляет операция, в которой ошибка возникла.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    /// Сервис сообщил, что подключиться к базе не удалось
    #[error("{0}")]
    Connection(String),

    /// Сервис не смог перевести или выполнить запрос
    #[error("{0}")]
    Query(String),

    /// Сеть недоступна или ответ не разобран
    #[error("{0}")]
    Transport(String),
}
