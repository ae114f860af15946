//! Element ids of the host page. The shell owns no markup except what it
//! injects into these placeholders.

pub const UPLOAD_AREA: &str = "uploadArea";
pub const UPLOAD_PROMPT: &str = "uploadPrompt";
pub const FILE_INPUT: &str = "resume";
pub const FILE_INFO: &str = "fileInfo";
pub const FILE_NAME: &str = "fileName";
pub const REMOVE_FILE: &str = "removeFile";
pub const ANALYZE_BUTTON: &str = "analyzeBtn";
pub const BUTTON_TEXT: &str = "btnText";
pub const BUTTON_SPINNER: &str = "btnSpinner";
pub const LOADING_SECTION: &str = "loadingSection";
pub const LOADING_TEXT: &str = "loadingText";
pub const PROGRESS_FILL: &str = "progressFill";
pub const PROGRESS_PERCENTAGE: &str = "progressPercentage";
pub const STEP_IDS: [&str; 4] = ["step1", "step2", "step3", "step4"];
pub const RESULT_SECTION: &str = "resultSection";
pub const RESULT: &str = "result";
