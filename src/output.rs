// 💾 Output Writer - serializes the run artifacts as CSV
//
// Five artifacts: the facts table, the state breakdown, and under checks/
// the name crosswalk, the QA log and the static data dictionary.

use crate::pipeline::EtlOutput;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Static documentation of the facts relation. Fixed content, not derived
/// from the run.
const DATA_DICTIONARY: &[(&str, &str, &str, &str)] = &[
    (
        "Insurer",
        "Standardized insurer name",
        "String",
        "See name_xwalk for original to standardized mapping",
    ),
    (
        "Year",
        "Fiscal year ending (e.g., 2024 = FY 2023-24)",
        "Integer",
        "Extracted from \"YYYY-YY\" or \"as on 31 March YYYY\" format",
    ),
    (
        "L1",
        "Product category Level 1",
        "String",
        "Values: Linked, Non-Linked, or blank",
    ),
    (
        "L2",
        "Product category Level 2",
        "String",
        "Values: Participating, Non-Participating, VIP, or blank",
    ),
    (
        "L3",
        "Product category Level 3",
        "String",
        "Values: Life, Annuity, Pension, Health, or blank",
    ),
    (
        "Individual_Group",
        "Business segment",
        "String",
        "Values: Individual, Group, Not Applicable",
    ),
    (
        "Distribution_Channel",
        "Sales channel",
        "String",
        "Values: Individual Agents, Corporate Agents - Banks, Corporate Agents - Others, \
         Brokers, Direct Selling, MI Agents, CSCs, Web Aggregators, IMF, Online, POS, \
         Others, or blank",
    ),
    (
        "KPI",
        "Key Performance Indicator",
        "String",
        "Total Premium, New Business Premium, New Business Policy, Total Policy (Year-End), \
         Sum Assured (Year-End), Assets Under Management, Solvency Ratio, \
         Persistency (13M/25M/37M/49M/61M, Policy), Number of Offices",
    ),
    (
        "Value",
        "Metric value",
        "Number",
        "Units: Premium/Sum Assured/AUM in absolute currency (converted from Crore x 10,000,000); \
         Policies/Offices as integers; Persistency 0-100; Solvency as-is",
    ),
    (
        "Source",
        "Source table reference",
        "String",
        "Table number from the handbook",
    ),
];

/// Write all run artifacts under the output directory
pub fn write_outputs(out_dir: &Path, output: &EtlOutput) -> Result<()> {
    let checks_dir = out_dir.join("checks");
    fs::create_dir_all(&checks_dir)
        .with_context(|| format!("Failed to create output directory: {}", checks_dir.display()))?;

    write_facts(&out_dir.join("facts_table.csv"), output)?;
    write_state_breakdown(&out_dir.join("state_breakdown.csv"), output)?;
    write_crosswalk(&checks_dir.join("name_xwalk.csv"), output)?;
    write_qa_log(&checks_dir.join("qa_logs.csv"), output)?;
    write_data_dictionary(&checks_dir.join("data_dictionary.csv"))?;

    Ok(())
}

fn write_facts(path: &Path, output: &EtlOutput) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for fact in &output.facts {
        writer.serialize(fact)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_state_breakdown(path: &Path, output: &EtlOutput) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for detail in &output.state_breakdown {
        writer.serialize(detail)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_crosswalk(path: &Path, output: &EtlOutput) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    writer.write_record(["Original_Name", "Standardized_Name"])?;
    for (raw, canonical) in output.crosswalk.entries() {
        writer.write_record([raw.as_str(), canonical.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_qa_log(path: &Path, output: &EtlOutput) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for entry in &output.qa_log {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_data_dictionary(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    writer.write_record(["Column", "Description", "Type", "Notes"])?;
    for (column, description, type_name, notes) in DATA_DICTIONARY {
        writer.write_record([*column, *description, *type_name, *notes])?;
    }
    writer.flush()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Fact, Value};

    #[test]
    fn test_facts_csv_shape_and_integral_rendering() {
        let facts = vec![
            Fact::new("LIC", 2024, "Total Premium", Value::from_f64(1_505_000_000.0), "Part I - Table 2"),
            Fact::new("LIC", 2024, "Solvency Ratio", Value::from_f64(1.85), "Part I - Table 23"),
        ];

        let mut writer = csv::Writer::from_writer(Vec::new());
        for fact in &facts {
            writer.serialize(fact).unwrap();
        }
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Insurer,Year,L1,L2,L3,Individual_Group,Distribution_Channel,KPI,Value,Source"
        );
        // Integral values carry no decimal point; blanks are empty fields
        assert_eq!(
            lines.next().unwrap(),
            "LIC,2024,,,,Not Applicable,,Total Premium,1505000000,Part I - Table 2"
        );
        assert_eq!(
            lines.next().unwrap(),
            "LIC,2024,,,,Not Applicable,,Solvency Ratio,1.85,Part I - Table 23"
        );
    }

    #[test]
    fn test_data_dictionary_covers_all_fact_columns() {
        let columns: Vec<&str> = DATA_DICTIONARY.iter().map(|(c, _, _, _)| *c).collect();
        assert_eq!(
            columns,
            vec![
                "Insurer",
                "Year",
                "L1",
                "L2",
                "L3",
                "Individual_Group",
                "Distribution_Channel",
                "KPI",
                "Value",
                "Source"
            ]
        );
    }
}
