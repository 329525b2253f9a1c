//! slugline - annotated screenplay to HTML converter

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use slugline::{HtmlExporter, Script, StyleSpan, resolve_class, scan_runs};

#[derive(Parser)]
#[command(name = "slugline")]
#[command(version, about = "Annotated screenplay to HTML converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    slugline scene.txt                          Write scene.html
    slugline scene.txt -s scene.spans.json      Use annotator output
    slugline scene.txt out.html --css           Also write the stylesheet
    slugline --stats scene.txt                  Show run counts only")]
struct Cli {
    /// Input screenplay text file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output HTML file (defaults to the name derived from the input)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// JSON span file from the annotator: [{"start":0,"end":9,"tag":"..."}]
    #[arg(short, long, value_name = "FILE")]
    spans: Option<String>,

    /// Also write the companion stylesheet next to the HTML file
    #[arg(long)]
    css: bool,

    /// Show run and class counts without writing output
    #[arg(long)]
    stats: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let text = fs::read_to_string(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;

    let spans: Vec<StyleSpan> = match &cli.spans {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
            serde_json::from_str(&json).map_err(|e| format!("{path}: {e}"))?
        }
        None => Vec::new(),
    };

    let name = Path::new(&cli.input)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let script = Script::with_spans(text, spans)
        .map_err(|e| e.to_string())?
        .with_name(name);
    let exporter = HtmlExporter::new();

    if cli.stats {
        return show_stats(&cli.input, &script);
    }

    let html = exporter.export(&script).map_err(|e| e.to_string())?;
    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| exporter.html_file_name(&script));
    fs::write(&out_path, &html).map_err(|e| format!("{out_path}: {e}"))?;
    if !cli.quiet {
        println!("Wrote {out_path}");
    }

    if cli.css {
        // The stylesheet belongs next to the HTML file, not in the cwd.
        let css_path = Path::new(&out_path).with_file_name(exporter.css_file_name(&script));
        fs::write(&css_path, exporter.default_stylesheet())
            .map_err(|e| format!("{}: {e}", css_path.display()))?;
        if !cli.quiet {
            println!("Wrote {}", css_path.display());
        }
    }

    Ok(())
}

fn show_stats(path: &str, script: &Script) -> Result<(), String> {
    let runs = scan_runs(script, 0..script.len()).map_err(|e| e.to_string())?;

    let mut by_class: BTreeMap<String, usize> = BTreeMap::new();
    for run in &runs {
        let (class, _) = resolve_class(run.tag.as_deref());
        *by_class.entry(class.to_string()).or_insert(0) += 1;
    }

    println!("File: {path}");
    println!("Bytes: {}", script.len());
    println!("Runs: {}", runs.len());
    for (class, count) in &by_class {
        println!("  {class}: {count}");
    }

    Ok(())
}
