use crate::engines::decoding::{Chromosome, Partition};

const FIVE_TERM_TAGS: [&str; 5] = ["Neg_Large:", "Negative:", "Zero:", "Positive:", "Pos_Large:"];
const THREE_TERM_TAGS: [&str; 3] = ["Small/Low:", "Medium:", "Large/High:"];

/// Human-readable listing of the decoded parameters, per variable
pub fn render_parameter_summary(chromosome: &Chromosome) -> String {
    let rule = "=".repeat(60);
    let mut lines = vec![String::new(), rule.clone(), "OPTIMIZED PARAMETERS SUMMARY".to_string(), rule.clone()];

    for (schema, params) in chromosome.parameter_slices() {
        lines.push(String::new());
        lines.push(format!("{}:", schema.title));
        lines.push(format!("  Range: [{}, {}]", schema.domain.0, schema.domain.1));

        let tags: &[&str] = match schema.partition {
            Partition::FiveTerms => &FIVE_TERM_TAGS,
            Partition::ThreeTerms => &THREE_TERM_TAGS,
        };

        let mut offset = 0;
        for (tag, shape) in tags.iter().zip(schema.partition.shapes()) {
            let end = offset + shape.param_count();
            let formatted: Vec<String> = params[offset..end].iter().map(|p| format!("{:.2}", p)).collect();
            lines.push(format!("  {:<12}[{}]", tag, formatted.join(", ")));
            offset = end;
        }
    }

    lines.push(String::new());
    lines.push(rule);
    lines.join("\n")
}
