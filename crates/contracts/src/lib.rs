//! Типы, общие для фронтенда и сервиса-ассистента: DTO запросов и ответов,
//! модель результата запроса и таксономия ошибок.

pub mod usecases;
