//! Glass CLI

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use glassc::{check_files, init_tracing, list_builtins, parse_run_args, run_files};

fn main() {
    init_tracing();

    let args: Vec<OsString> = std::env::args_os().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].to_string_lossy();

    match command.as_ref() {
        "run" => match parse_run_args(&args[2..]) {
            Ok((files, options)) => std::process::exit(run_files(&files, &options)),
            Err(err) => {
                eprint!("{}", err.report());
                eprintln!("Usage: glass run <file.glass>... [options] [-- args...]");
                std::process::exit(1);
            }
        },
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: glass check <file.glass>...");
                std::process::exit(1);
            }
            let files: Vec<PathBuf> = args[2..].iter().map(PathBuf::from).collect();
            std::process::exit(check_files(&files));
        }
        "builtins" => list_builtins(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("Glass {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source path runs it.
            if Path::new(&args[1])
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("glass"))
            {
                match parse_run_args(&args[1..]) {
                    Ok((files, options)) => std::process::exit(run_files(&files, &options)),
                    Err(err) => {
                        eprint!("{}", err.report());
                        std::process::exit(1);
                    }
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Glass interpreter");
    println!();
    println!("Usage: glass <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <files...>       Load the files and run M.m");
    println!("  check <files...>     Parse and resolve classes without running");
    println!("  builtins             List the builtin classes and methods");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --heap=<n>           Initial heap slots (default 1024)");
    println!("  --max-depth=<n>      Fail once n calls are active");
    println!("  --gc-stats           Print heap statistics after the run");
    println!("  -- <args...>         Arguments read by I.a");
    println!();
    println!("Logging:");
    println!("  GLASS_LOG=glass_eval=debug glass run prog.glass");
    println!();
    println!("Examples:");
    println!("  glass run hello.glass");
    println!("  glass run lib.glass main.glass -- input.txt");
    println!("  glass check main.glass");
}
