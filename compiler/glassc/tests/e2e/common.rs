//! A temporary directory of Glass sources plus a buffered runner.

use std::path::PathBuf;

use glass_eval::{buffer_handler, HeapStats, InputSource};
use glassc::{load_files, run_program, DriverError, RunOptions};
use tempfile::TempDir;

pub struct Outcome {
    pub result: Result<HeapStats, DriverError>,
    pub stdout: String,
}

impl Outcome {
    /// Output of a run that must succeed.
    pub fn ok(self) -> String {
        if let Err(err) = &self.result {
            panic!("program failed:\n{}", err.report());
        }
        self.stdout
    }

    pub fn err(self) -> DriverError {
        match self.result {
            Ok(_) => panic!("program succeeded with output {:?}", self.stdout),
            Err(err) => err,
        }
    }
}

pub struct Project {
    dir: TempDir,
    files: Vec<PathBuf>,
}

impl Project {
    pub fn new() -> Self {
        Project {
            dir: tempfile::tempdir().unwrap(),
            files: Vec::new(),
        }
    }

    /// Add a source file; files load in the order added.
    pub fn file(mut self, name: &str, source: &str) -> Self {
        let path = self.path(name);
        std::fs::write(&path, source).unwrap();
        self.files.push(path);
        self
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn run(&self) -> Outcome {
        self.run_with(&RunOptions::default(), "")
    }

    pub fn run_with(&self, options: &RunOptions, stdin: &str) -> Outcome {
        let output = buffer_handler();
        let result = load_files(&self.files)
            .map_err(DriverError::from)
            .and_then(|classes| {
                run_program(
                    &classes,
                    options,
                    output.clone(),
                    InputSource::from_bytes(stdin),
                )
                .map_err(DriverError::from)
            });
        Outcome {
            result,
            stdout: output.get_output(),
        }
    }
}

/// Run a single-file program.
pub fn run(source: &str) -> Outcome {
    Project::new().file("main.glass", source).run()
}
