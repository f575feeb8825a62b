//! `springgen types`: list the field types an entity may declare.

use serde::Serialize;

use springgen_core::domain::FieldType;

use crate::{
    cli::{ListFormat, TypesArgs},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct TypeRow {
    name: &'static str,
    import: Option<&'static str>,
}

fn rows() -> Vec<TypeRow> {
    FieldType::ALL
        .iter()
        .map(|t| TypeRow {
            name: t.as_str(),
            import: t.java_import(),
        })
        .collect()
}

pub fn execute(args: TypesArgs, output: OutputManager) -> CliResult<()> {
    let rows = rows();

    match args.format {
        ListFormat::Table => {
            output.header("Supported field types:")?;
            for row in &rows {
                let line = match row.import {
                    Some(import) => format!("  {:<15} import {import};", row.name),
                    None => format!("  {}", row.name),
                };
                output.print(&line)?;
            }
        }
        ListFormat::List => {
            for row in &rows {
                output.value(row.name)?;
            }
        }
        ListFormat::Json => output.json(&rows)?,
    }

    Ok(())
}
