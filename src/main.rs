use sql_recover::report::ExtractionReport;
use std::fs;
use std::io::{self, Read};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let json_mode = args.iter().any(|arg| arg == "--json");
    let path = args.iter().find(|arg| !arg.starts_with("--")).cloned();

    let source = match path.as_deref() {
        Some(p) if p != "-" => fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let statements = sql_recover::extract_sql(&source);

    if json_mode {
        let report = ExtractionReport::new(statements);
        let rendered = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        println!("{}", rendered);
        return Ok(());
    }

    if statements.is_empty() {
        eprintln!("No SQL-like string assignment or StringBuilder append found.");
        return Ok(());
    }

    for (i, sql) in statements.iter().enumerate() {
        if statements.len() > 1 {
            println!("-- statement {} --", i + 1);
        }
        println!("{}", sql);
        if i + 1 < statements.len() {
            println!();
        }
    }

    Ok(())
}
