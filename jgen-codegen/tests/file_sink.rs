//! Writing generated classes through real file handles.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
};

use javagen_codegen::{
    ClassDefinition, ClassQualifier, IntMember, JavaFile, ResourceId, write_java_file,
};
use tempfile::TempDir;

fn r_class() -> ClassDefinition {
    ClassDefinition::new("R", ClassQualifier::None, true).member(
        ClassDefinition::new("string", ClassQualifier::Static, false)
            .member(IntMember::new("app_name", ResourceId(0x7f020000))),
    )
}

#[test]
fn test_write_java_file_to_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("R.java");

    // opening and flushing the file is the caller's job
    let mut out = BufWriter::new(File::create(&path).unwrap());
    assert!(write_java_file(&r_class(), "com.example", true, &mut out));
    out.flush().unwrap();
    drop(out);

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, JavaFile::new("com.example", r_class()).render());
    assert!(written.contains("package com.example;\n\n"));
    assert!(written.ends_with("    public static final int app_name=0x7f020000;\n  }\n}"));
}

#[test]
fn test_java_file_write_to_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("R.java");

    let file = JavaFile::new("com.example", r_class());
    file.write_to(File::create(&path).unwrap()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), file.render());
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_device_reports_failure() {
    let Ok(mut full) = fs::OpenOptions::new().write(true).open("/dev/full") else {
        return;
    };
    assert!(!write_java_file(&r_class(), "com.example", true, &mut full));
}
