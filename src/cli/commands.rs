use crate::{
    cli::args::{ApplyArgs, ValidateArgs},
    core::pipeline::{apply_columns, builtin_registry, parse_pipeline, validate_pipeline},
    core::table::io::{read_table_json, render_table_json, write_table_json},
    Result,
};
use tracing::info;

pub fn apply(args: ApplyArgs) -> Result<()> {
    let doc = parse_pipeline(&args.pipeline)?;
    let registry = builtin_registry();
    validate_pipeline(&doc, &registry)?;
    let table = read_table_json(&args.input)?;
    info!(
        rows = table.row_count(),
        steps = doc.columns.len(),
        "applying pipeline {}",
        args.pipeline.display()
    );
    let result = apply_columns(&registry, table, &doc.columns)?;
    match args.output {
        Some(path) => write_table_json(&path, &result)?,
        None => println!("{}", render_table_json(&result)?),
    }
    Ok(())
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let doc = parse_pipeline(&args.pipeline)?;
    let registry = builtin_registry();
    validate_pipeline(&doc, &registry)?;
    println!(
        "pipeline {} is valid ({} column steps)",
        args.pipeline.display(),
        doc.columns.len()
    );
    Ok(())
}
