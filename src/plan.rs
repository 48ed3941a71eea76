//! 生成するテストスイートのデータモデル
//!
//! テキストを組み立てる前に、クラス名・演算子・各テストケースを
//! `SuitePlan` として確定させます。「2^1 から 2^30 までの30ケース」という
//! 構造はここで決まり、描画とは独立に検査できます。

use crate::codegen::types::JavaInt;
use crate::error::{GenError, GenResult};
use crate::range::narrow_values;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// 最初の指数（n = 2）
pub const FIRST_EXPONENT: u32 = 1;
/// 最後の指数（n = 2^30）
pub const LAST_EXPONENT: u32 = 30;

/// 引数が欠けている場合の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingInputPolicy {
    /// エラーにして何も出力しない
    #[default]
    Reject,
    /// 空文字列としてそのまま埋め込む（旧来の挙動）
    Substitute,
}

/// 呼び出しパラメータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationParams {
    pub class_name: String,
    pub operator: String,
}

impl InvocationParams {
    /// 位置引数からパラメータを作成する。空文字列は欠落として扱う
    pub fn from_args(
        class_name: Option<&str>,
        operator: Option<&str>,
        policy: MissingInputPolicy,
    ) -> GenResult<Self> {
        let class_name = non_empty(class_name);
        let operator = non_empty(operator);

        match policy {
            MissingInputPolicy::Reject => Ok(Self {
                class_name: class_name.ok_or(GenError::MissingClassName)?.to_string(),
                operator: operator.ok_or(GenError::MissingOperator)?.to_string(),
            }),
            MissingInputPolicy::Substitute => {
                if class_name.is_none() {
                    log::warn!("class name is missing; emitting an empty identifier");
                }
                if operator.is_none() {
                    log::warn!("operator is missing; emitting an empty operator");
                }
                Ok(Self {
                    class_name: class_name.unwrap_or_default().to_string(),
                    operator: operator.unwrap_or_default().to_string(),
                })
            }
        }
    }
}

fn non_empty(arg: Option<&str>) -> Option<&str> {
    arg.filter(|s| !s.is_empty())
}

/// 1つのテストメソッドに対応する記述子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub exponent: u32,
    /// n = 2^exponent
    pub operand: i64,
}

impl TestCase {
    pub fn new(exponent: u32) -> Self {
        Self {
            exponent,
            operand: 1i64 << exponent,
        }
    }

    /// メソッド名（例: `test_1024`）
    pub fn method_name(&self) -> String {
        format!("test_{}", self.operand)
    }
}

/// 生成するテストクラス全体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitePlan {
    pub class_name: String,
    pub operator: String,
    /// 検査対象の型
    pub narrow: JavaInt,
    /// カウンタと比較計算に使う型
    pub wide: JavaInt,
    /// 各メソッドが走査する値の個数
    pub values_per_case: i64,
    pub cases: Vec<TestCase>,
}

impl SuitePlan {
    /// `int` を `long` と比較する標準構成のプランを作成
    pub fn new(params: InvocationParams) -> Self {
        let cases: Vec<TestCase> = Self::exponents().map(TestCase::new).collect();
        let values_per_case = narrow_values::<i32>().remaining();

        log::debug!(
            "planned {} cases for class '{}' with operator '{}'",
            cases.len(),
            params.class_name,
            params.operator
        );

        Self {
            class_name: params.class_name,
            operator: params.operator,
            narrow: JavaInt::Int,
            wide: JavaInt::Long,
            values_per_case,
            cases,
        }
    }

    /// 指数の範囲（昇順・固定）
    pub fn exponents() -> RangeInclusive<u32> {
        FIRST_EXPONENT..=LAST_EXPONENT
    }

    /// JSON形式で出力
    pub fn to_json(&self) -> GenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
