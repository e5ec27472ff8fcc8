/// Метаданные UseCase: индекс, техническое и отображаемое имя
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u601")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "sql_assistant")
    fn usecase_name() -> &'static str;

    /// Заголовок страницы
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u601_sql_assistant", используется как id страницы
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl UseCaseMetadata for Sample {
        fn usecase_index() -> &'static str {
            "u999"
        }

        fn usecase_name() -> &'static str {
            "sample"
        }

        fn display_name() -> &'static str {
            "Sample"
        }
    }

    #[test]
    fn test_full_name_joins_index_and_name() {
        assert_eq!(Sample::full_name(), "u999_sample");
        assert_eq!(Sample::description(), "");
    }
}
