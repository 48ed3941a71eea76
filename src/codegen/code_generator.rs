//! メインコード生成器

use crate::error::GenResult;
use crate::plan::{SuitePlan, TestCase};
use std::io::Write;

/// 生成クラスの基底型
pub const TEST_CASE_BASE: &str = "junit.framework.TestCase";

/// メソッド本体のインデント単位
const INDENT: &str = "  ";

/// メインコード生成器構造体
///
/// 状態を持たないので、同じプランからは常に同じテキストが得られる。
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// プラン全体を文字列として描画
    pub fn render(&self, plan: &SuitePlan) -> String {
        let mut source = self.class_header(plan);
        for case in &plan.cases {
            source.push_str(&self.method_source(plan, case));
        }
        source.push_str(&self.class_footer());
        source
    }

    /// プラン全体を書き込み先へ出力
    pub fn write_suite<W: Write>(&self, plan: &SuitePlan, out: &mut W) -> GenResult<()> {
        out.write_all(self.class_header(plan).as_bytes())?;
        for case in &plan.cases {
            log::trace!("emitting {}", case.method_name());
            out.write_all(self.method_source(plan, case).as_bytes())?;
        }
        out.write_all(self.class_footer().as_bytes())?;
        Ok(())
    }

    /// クラス宣言の開始行
    pub fn class_header(&self, plan: &SuitePlan) -> String {
        format!("public class {} extends {} {{\n", plan.class_name, TEST_CASE_BASE)
    }

    pub fn class_footer(&self) -> String {
        "}\n".to_string()
    }

    /// 1ケース分のテストメソッド
    ///
    /// 広い型のカウンタで狭い型の最小値から最大値までを走査し、
    /// 狭い幅での演算結果と、広い幅で計算して切り詰めた結果を比較する。
    /// 不一致は標準エラーに出すだけで、走査は止めない。
    pub fn method_source(&self, plan: &SuitePlan, case: &TestCase) -> String {
        let narrow = plan.narrow.keyword();
        let wide = plan.wide.keyword();
        let op = &plan.operator;
        let narrow_operand = plan.narrow.literal(case.operand);
        let wide_operand = plan.wide.literal(case.operand);

        let lines = [
            (1, format!("public void {}() {{", case.method_name())),
            (
                2,
                format!(
                    "for ({wide} l = {}; l <= {}; ++l) {{",
                    plan.narrow.min_expr(),
                    plan.narrow.max_expr()
                ),
            ),
            (3, format!("{narrow} n = ({narrow}) l;")),
            (3, format!("{narrow} q1 = n {op} {narrow_operand};")),
            (3, format!("{narrow} q2 = ({narrow}) (l {op} {wide_operand});")),
            (3, "if (q1 != q2) {".to_string()),
            (
                4,
                r#"System.err.println("l=" + l + " q1=" + q1 + " q2=" + q2);"#.to_string(),
            ),
            (3, "}".to_string()),
            (2, "}".to_string()),
            (1, "}".to_string()),
        ];

        let mut source = String::new();
        for (depth, line) in lines {
            source.push_str(&INDENT.repeat(depth));
            source.push_str(&line);
            source.push('\n');
        }
        source
    }
}
