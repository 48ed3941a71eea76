//! 統一的なエラーハンドリングモジュール
//!
//! ジェネレータ全体で使用されるエラー型を定義します。
//! 演算子やクラス名の中身は検証しないため、ここに現れるのは
//! 入力の欠落と出力先への書き込み失敗だけです。

use thiserror::Error;

/// ジェネレータの統一エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// 第1引数（クラス名）が無い、または空
    #[error("missing class name (first positional argument)")]
    MissingClassName,

    /// 第2引数（演算子）が無い、または空
    #[error("missing operator (second positional argument)")]
    MissingOperator,

    /// 出力ストリームへの書き込みエラー
    #[error("failed to write generated source: {0}")]
    Output(String),

    /// プランのJSON化エラー
    #[error("failed to serialize suite plan: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for GenError {
    fn from(e: std::io::Error) -> Self {
        GenError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for GenError {
    fn from(e: serde_json::Error) -> Self {
        GenError::Serialize(e.to_string())
    }
}

/// ジェネレータの結果型
pub type GenResult<T> = Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_messages_name_the_argument() {
        assert!(GenError::MissingClassName.to_string().contains("class name"));
        assert!(GenError::MissingOperator.to_string().contains("operator"));
    }

    #[test]
    fn test_io_error_becomes_output_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: GenError = io.into();
        assert_eq!(err, GenError::Output("pipe closed".to_string()));
    }
}
