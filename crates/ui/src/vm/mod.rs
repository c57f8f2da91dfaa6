mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{
    ErrorBannerVm, QuestionVm, QuizPageVm, QuizScreenVm, ResultsVm, SetupFormErrors,
    map_error_banner, map_question, map_quiz_page, map_results, validate_setup_form,
};
