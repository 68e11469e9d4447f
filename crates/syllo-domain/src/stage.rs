//! Pipeline stages and their display projection.
//!
//! The reasoning workflow has a fixed, ordered set of phases. Display and
//! export both consume the same ordered projection so the two never drift.

use crate::record::StepStatus;
use crate::workflow::WorkflowResult;

/// One named phase of the reasoning workflow, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Entity extraction.
    Entities,
    /// Relation extraction.
    Relations,
    /// Search-space generation.
    SearchSpace,
    /// Argument construction.
    Arguments,
    /// Target construction.
    Targets,
    /// Program assembly.
    AspProgram,
    /// Solver execution.
    AspResult,
    /// Result interpretation.
    Interpretation,
    /// Final answer.
    FinalAnswer,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 9] = [
        Stage::Entities,
        Stage::Relations,
        Stage::SearchSpace,
        Stage::Arguments,
        Stage::Targets,
        Stage::AspProgram,
        Stage::AspResult,
        Stage::Interpretation,
        Stage::FinalAnswer,
    ];

    /// Stable key, matching the canonical result field names.
    pub fn key(self) -> &'static str {
        match self {
            Stage::Entities => "entities",
            Stage::Relations => "relations",
            Stage::SearchSpace => "searchSpace",
            Stage::Arguments => "arguments",
            Stage::Targets => "targets",
            Stage::AspProgram => "aspProgram",
            Stage::AspResult => "aspResult",
            Stage::Interpretation => "interpretation",
            Stage::FinalAnswer => "finalAnswer",
        }
    }

    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Stage::Entities => "实体提取",
            Stage::Relations => "关系提取",
            Stage::SearchSpace => "搜索空间生成",
            Stage::Arguments => "论证构建",
            Stage::Targets => "求解目标构建",
            Stage::AspProgram => "ASP程序拼接",
            Stage::AspResult => "ASP求解结果",
            Stage::Interpretation => "结果解释",
            Stage::FinalAnswer => "最终答案",
        }
    }

    /// One-line description shown next to the title.
    pub fn description(self) -> &'static str {
        match self {
            Stage::Entities => "从问题中提取实体和类别",
            Stage::Relations => "定义实体间的关系和谓词",
            Stage::SearchSpace => "生成ASP搜索规则和约束",
            Stage::Arguments => "构建问题的论证和约束条件",
            Stage::Targets => "定义求解目标和验证条件",
            Stage::AspProgram => "完整的ASP程序代码",
            Stage::AspResult => "ASP求解器的执行结果",
            Stage::Interpretation => "对求解结果的解释和分析",
            Stage::FinalAnswer => "问题的最终答案和置信度",
        }
    }
}

/// A stage paired with its display content and status.
#[derive(Debug, Clone, PartialEq)]
pub struct StageView {
    /// Which pipeline phase this is.
    pub stage: Stage,
    /// Stringified content; structured values render as pretty JSON.
    pub content: String,
    /// Display status. Only the solver stage can fail here.
    pub status: StepStatus,
}

/// Project a result into the ordered list of stage views.
///
/// Every stage reads as successful except the solver stage, whose status
/// follows the `success` flag of the solver output. A missing or raw
/// solver result counts as failed without erroring.
pub fn stage_views(result: &WorkflowResult) -> Vec<StageView> {
    Stage::ALL
        .iter()
        .map(|&stage| {
            let content = stage_content(result, stage);
            let status = match stage {
                Stage::AspResult => {
                    if result.asp_result.bool_flag("success") {
                        StepStatus::Success
                    } else {
                        StepStatus::Error
                    }
                }
                _ => StepStatus::Success,
            };
            StageView {
                stage,
                content,
                status,
            }
        })
        .collect()
}

fn stage_content(result: &WorkflowResult, stage: Stage) -> String {
    match stage {
        Stage::Entities => result.entities.clone(),
        Stage::Relations => result.relations.clone(),
        Stage::SearchSpace => result.search_space.clone(),
        Stage::Arguments => result.arguments.clone(),
        Stage::Targets => result.targets.clone(),
        Stage::AspProgram => result.asp_program.clone(),
        Stage::AspResult => result.asp_result.display_text(),
        Stage::Interpretation => result.interpretation.display_text(),
        Stage::FinalAnswer => result.final_answer.display_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::normalize;
    use serde_json::json;

    #[test]
    fn test_views_follow_pipeline_order() {
        let result = normalize(&json!({}));
        let views = stage_views(&result);
        assert_eq!(views.len(), 9);
        assert_eq!(views[0].stage, Stage::Entities);
        assert_eq!(views[6].stage, Stage::AspResult);
        assert_eq!(views[8].stage, Stage::FinalAnswer);
    }

    #[test]
    fn test_solver_stage_reflects_success_flag() {
        let ok = normalize(&json!({"asp_result": {"success": true}}));
        assert_eq!(stage_views(&ok)[6].status, StepStatus::Success);

        let failed = normalize(&json!({"asp_result": {"success": false}}));
        assert_eq!(stage_views(&failed)[6].status, StepStatus::Error);

        // missing solver output reads as failed, without erroring
        let missing = normalize(&json!({}));
        assert_eq!(stage_views(&missing)[6].status, StepStatus::Error);
    }

    #[test]
    fn test_structured_content_is_pretty_json() {
        let result = normalize(&json!({"asp_result": {"success": true, "model_count": 2}}));
        let views = stage_views(&result);
        assert!(views[6].content.contains("\"success\": true"));
    }
}
