//! sealum CLI
//!
//! Planning itself runs inside a host build tool; this binary documents
//! error codes and policies and checks processor options.

use sealum_diagnostic::ErrorCode;
use sealum_ir::DeclName;
use sealumc::{describe_policies, init_tracing, ProcessorOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: sealum --explain <ERROR_CODE>");
                eprintln!("Example: sealum --explain E2001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "policies" => list_policies(
            args.get(2).map(String::as_str),
            args.get(3).map(String::as_str),
        ),
        "options" => check_options(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("sealum {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}  {}", code.summary());
        }
        std::process::exit(1);
    };

    println!("{code}: {}", code.summary());
    println!();
    println!("{}", code.explain());
}

/// Print each policy, or only `tag`, with the artifact names it produces
/// for `root`.
fn list_policies(root: Option<&str>, tag: Option<&str>) {
    let root = DeclName::from(root.unwrap_or("Shape"));
    match describe_policies(&root, tag) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn check_options(args: &[String]) {
    match ProcessorOptions::from_args(args) {
        Ok(options) => println!("{options}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("sealum: closed-hierarchy enumeration planner");
    println!();
    println!("Usage: sealum <command> [options]");
    println!();
    println!("Commands:");
    println!("  --explain <code>        Explain an error code (e.g., E2001)");
    println!("  policies [root] [tag]   List traversal policies and their artifacts");
    println!("  options <key=value>...  Check processor options");
    println!("  help                    Show this help message");
    println!("  version                 Show version information");
    println!();
    println!("Options:");
    println!("  sealum.disabled=<bool>     Skip processing entirely");
    println!("  sealum.parallel=<bool>     Plan roots on a thread pool (default: true)");
    println!("  sealum.error_limit=<n>     Report at most n failures (0: all)");
    println!();
    println!("Set SEALUM_LOG (e.g. sealum_plan=debug) for trace output.");
}
