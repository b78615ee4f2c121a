/// UseCase metadata used for identification in the UI and in logs
pub trait UseCaseMetadata {
    /// UseCase index (for example "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (for example "generate_article")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u501_generate_article"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
