//! Java整数型の表記

use serde::{Deserialize, Serialize};

/// 生成コードで使う Java の整数型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JavaInt {
    Int,
    Long,
}

impl JavaInt {
    /// 型キーワード
    pub fn keyword(self) -> &'static str {
        match self {
            JavaInt::Int => "int",
            JavaInt::Long => "long",
        }
    }

    /// ボックス型（`MIN_VALUE` / `MAX_VALUE` の所属クラス）
    pub fn boxed(self) -> &'static str {
        match self {
            JavaInt::Int => "Integer",
            JavaInt::Long => "Long",
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            JavaInt::Int => 32,
            JavaInt::Long => 64,
        }
    }

    /// 最小値の式（例: `Integer.MIN_VALUE`）
    pub fn min_expr(self) -> String {
        format!("{}.MIN_VALUE", self.boxed())
    }

    /// 最大値の式（例: `Integer.MAX_VALUE`）
    pub fn max_expr(self) -> String {
        format!("{}.MAX_VALUE", self.boxed())
    }

    /// この型の整数リテラル。`long` には `L` 接尾辞を付ける
    pub fn literal(self, value: i64) -> String {
        match self {
            JavaInt::Int => value.to_string(),
            JavaInt::Long => format!("{}L", value),
        }
    }

    /// 狭い型から広い型へ暗黙に拡張できるか
    pub fn widens_to(self, other: JavaInt) -> bool {
        self.bits() < other.bits()
    }
}

impl std::fmt::Display for JavaInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
