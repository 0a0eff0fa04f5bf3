use crate::catalog;
use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Fit Report\n\n");
    output.push_str(&format!("Overall score: {} / 100\n", report.overall));
    output.push_str(&format!(
        "Recommendation: {}\n\n",
        report.recommendation.label()
    ));

    output.push_str("## Category Scores\n\n");
    output.push_str(&format!(
        "- psychometric: {}\n- technical: {}\n\n",
        report.psychometric, report.technical
    ));

    output.push_str("## Readiness Factors\n\n");
    output.push_str(&format!(
        "- will: {}\n- interest: {}\n- skill: {}\n- cognitive readiness: {}\n- ability to learn: {}\n- real-world alignment: {}\n",
        report.factors.will,
        report.factors.interest,
        report.factors.skill,
        report.factors.cognitive_readiness,
        report.factors.ability_to_learn,
        report.factors.real_world_alignment
    ));

    output
}

pub fn catalog_to_markdown() -> String {
    let mut output = String::new();
    output.push_str("# Question Catalog\n\n");
    for question in catalog::CATALOG {
        output.push_str(&format!(
            "## {} ({})\n\n{}\n",
            question.id,
            question.kind.label(),
            question.prompt
        ));
        if let Some(options) = question.options {
            for option in options {
                output.push_str(&format!("- {option}\n"));
            }
        }
        if let Some(range) = question.range {
            output.push_str(&format!(
                "- range: {} to {} in steps of {}\n",
                range.min, range.max, range.step
            ));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::assess;
    use crate::types::answers::AnswerSet;

    #[test]
    fn markdown_report_contains_sections() {
        let mut answers = AnswerSet::new();
        answers.record("interest_1", 7);
        let rendered = to_markdown(&assess(&answers));
        assert!(rendered.contains("# Fit Report"));
        assert!(rendered.contains("## Category Scores"));
        assert!(rendered.contains("## Readiness Factors"));
        assert!(rendered.contains("Recommendation: "));
    }

    #[test]
    fn markdown_catalog_lists_options_and_ranges() {
        let rendered = catalog_to_markdown();
        assert!(rendered.contains("## working_style_1 (single-choice)"));
        assert!(rendered.contains("- Mix of creative and technical environments"));
        assert!(rendered.contains("## tools_1 (continuous-range)"));
        assert!(rendered.contains("- range: 0 to 100 in steps of 5"));
    }
}
