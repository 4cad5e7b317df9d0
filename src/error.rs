use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("列 '{column}' が見つかりません: {file}")]
    MissingColumn { column: String, file: String },

    #[error("CSV解析エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("抽出対象の論文が不足しています（要求: {requested}件, 残り: {available}件）")]
    InsufficientPool { requested: usize, available: usize },

    #[error("出力先が候補論文または過去ラウンドのファイルと同じです: {0}")]
    OutputConflict(String),

    #[error("抽出数は1以上を指定してください")]
    EmptySample,

    #[error(transparent)]
    Common(#[from] review_tools_common::Error),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
