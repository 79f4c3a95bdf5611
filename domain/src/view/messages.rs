//! User-facing strings

/// Blocking notification shown when the question input is empty
pub const EMPTY_QUESTION_ALERT: &str = "質問を入力してください。";

/// Placeholder written to the result region while a request is in flight
pub const SEARCHING_PLACEHOLDER: &str = "検索中...";

/// Banner written to the result region before the error message
pub const ERROR_BANNER: &str = "エラーが発生しました。詳細はコンソールを確認してください。";
