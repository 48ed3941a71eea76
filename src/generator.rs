//! 生成処理のメインモジュール
//!
//! 引数の検証、プランの作成、ソースの描画を1つのパイプラインにまとめます。

use crate::codegen::CodeGenerator;
use crate::error::GenResult;
use crate::plan::{InvocationParams, MissingInputPolicy, SuitePlan};
use std::io::Write;

/// 生成パイプライン
#[derive(Debug, Clone, Default)]
pub struct GenerationPipeline {
    policy: MissingInputPolicy,
    codegen: CodeGenerator,
}

impl GenerationPipeline {
    pub fn new(policy: MissingInputPolicy) -> Self {
        Self {
            policy,
            codegen: CodeGenerator::new(),
        }
    }

    /// 位置引数からプランを作成
    pub fn plan(&self, class_name: Option<&str>, operator: Option<&str>) -> GenResult<SuitePlan> {
        let params = InvocationParams::from_args(class_name, operator, self.policy)?;
        Ok(SuitePlan::new(params))
    }

    /// プランを描画して書き込み先へ出力し、最後にフラッシュする
    pub fn emit<W: Write>(&self, plan: &SuitePlan, out: &mut W) -> GenResult<()> {
        self.codegen.write_suite(plan, out)?;
        out.flush()?;
        log::debug!("wrote {} test methods for {}", plan.cases.len(), plan.class_name);
        Ok(())
    }

    /// プランを文字列として描画
    pub fn render(&self, plan: &SuitePlan) -> String {
        self.codegen.render(plan)
    }
}

/// クラス名と演算子からテストクラスのソースを生成
///
/// どちらかが空文字列なら対応するエラーを返し、何も生成しない。
pub fn generate(class_name: &str, operator: &str) -> GenResult<String> {
    let pipeline = GenerationPipeline::default();
    let plan = pipeline.plan(Some(class_name), Some(operator))?;
    Ok(pipeline.render(&plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;
    use std::io;

    /// 書き込みのたびに失敗する出力先
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_is_fatal() {
        let pipeline = GenerationPipeline::default();
        let plan = pipeline.plan(Some("X"), Some("+")).unwrap();
        let err = pipeline.emit(&plan, &mut ClosedPipe).unwrap_err();
        assert!(matches!(err, GenError::Output(_)));
    }

    #[test]
    fn test_permissive_pipeline_emits_empty_identifier() {
        let pipeline = GenerationPipeline::new(MissingInputPolicy::Substitute);
        let plan = pipeline.plan(None, None).unwrap();
        let source = pipeline.render(&plan);
        assert!(source.starts_with("public class  extends junit.framework.TestCase {"));
        assert!(source.contains("int q1 = n  2;"));
    }
}
