pub mod u601_sql_assistant;
