use anyhow::Result;
use caesar_shell::{
    CipherError, Console, FileAdapter, FileOutcome, LocalStorage, Mode, SessionSummary, Shell,
    Shift,
};
use std::path::Path;
use tempfile::TempDir;

/// Feed `script` to a shell rooted at `dir` and collect everything it printed.
fn run_session(dir: &Path, script: &str) -> (caesar_shell::Result<SessionSummary>, String) {
    run_session_with_output(dir, "results.txt", script)
}

fn run_session_with_output(
    dir: &Path,
    output_path: &str,
    script: &str,
) -> (caesar_shell::Result<SessionSummary>, String) {
    let mut output = Vec::new();
    let result = {
        let console = Console::new(script.as_bytes(), &mut output);
        let mut shell = Shell::new(console, LocalStorage::new(dir), output_path);
        shell.run()
    };
    (result, String::from_utf8(output).expect("shell output is UTF-8"))
}

/// Text printed after the last prompt on each line: cipher results and notices.
fn answer_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .map(|line| line.rsplit(": ").next().unwrap_or(line))
        .collect()
}

#[test]
fn test_file_round_writes_results() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("messages.txt"),
        "Hello World\n  attack at dawn  \nmeet @ 10pm\n",
    )?;

    let (result, output) = run_session(temp_dir.path(), "e\nf\n3\nmessages.txt\nn\n");

    assert_eq!(result?, SessionSummary { cycles: 1, files_written: 1 });
    assert!(output.starts_with("Welcome to the Caesar Cipher\n"));
    let expected = temp_dir.path().join("results.txt");
    assert!(output.contains(&format!("Output written to {}", expected.display())));

    let written = std::fs::read_to_string(temp_dir.path().join("results.txt"))?;
    assert_eq!(written, "KHOOR ZRUOG\nDWWDFN DW GDZQ\nPHHW @ 10SP\n");
    Ok(())
}

#[test]
fn test_file_prompt_repeats_until_file_exists() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("secret.txt"), "KHOOR\n")?;
    std::fs::create_dir(temp_dir.path().join("folder"))?;

    let (result, output) = run_session(
        temp_dir.path(),
        "d\nF\n3\nmissing.txt\nfolder\nsecret.txt\nN\n",
    );

    assert!(result.is_ok());
    assert!(output.contains("File missing.txt not found."));
    assert!(output.contains("Error reading file: is a directory"));
    assert_eq!(output.matches("Enter a filename: ").count(), 3);
    assert_eq!(std::fs::read_to_string(temp_dir.path().join("results.txt"))?, "HELLO\n");
    Ok(())
}

#[test]
fn test_second_file_run_overwrites_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("long.txt"), "one\ntwo\nthree\n")?;
    std::fs::write(temp_dir.path().join("short.txt"), "four\n")?;

    let script = "e\nf\n1\nlong.txt\ny\ne\nf\n1\nshort.txt\nn\n";
    let (result, _) = run_session(temp_dir.path(), script);

    assert_eq!(result?, SessionSummary { cycles: 2, files_written: 2 });
    assert_eq!(std::fs::read_to_string(temp_dir.path().join("results.txt"))?, "GPVS\n");
    Ok(())
}

#[test]
fn test_empty_file_leaves_output_alone() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("empty.txt"), "")?;

    let (result, output) = run_session(temp_dir.path(), "e\nf\n5\nempty.txt\nn\n");

    assert_eq!(result?.files_written, 0);
    assert!(!output.contains("Output written"));
    assert!(!temp_dir.path().join("results.txt").exists());
    Ok(())
}

#[test]
fn test_invalid_tokens_reprompt_then_mixed_rounds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let script = "x\nencrypt\nq\nconsole\n25\nabc\nmaybe\nyes\nD\nc\n25\nzab\nno\n";

    let (result, output) = run_session(temp_dir.path(), script);

    assert_eq!(result?, SessionSummary { cycles: 2, files_written: 0 });
    assert!(output.contains("Invalid mode, please enter 'e' or 'd'."));
    assert!(output.contains("Invalid choice, please enter 'f' or 'c'."));
    assert!(output.contains("Invalid response, please enter 'y' or 'n'."));
    let answers = answer_lines(&output);
    assert!(answers.contains(&"ZAB"));
    assert!(answers.contains(&"ABC"));
    assert!(output.ends_with("Thanks for using the program.\n"));
    Ok(())
}

#[test]
fn test_closed_input_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (result, _) = run_session(temp_dir.path(), "e\nc\n");
    assert!(matches!(result, Err(CipherError::InputClosed)));
    Ok(())
}

#[test]
fn test_adapter_missing_file_yields_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path());
    let adapter = FileAdapter::new(&storage, "results.txt");
    let shift = Shift::new(7)?;

    let err = adapter
        .transform(Path::new("nowhere.txt"), Mode::Encrypt, shift)
        .unwrap_err();
    assert!(matches!(err, CipherError::FileNotFound { .. }));

    let outcome = adapter.run(Path::new("nowhere.txt"), Mode::Encrypt, shift);
    assert!(matches!(outcome, FileOutcome::Failed(CipherError::FileNotFound { .. })));
    assert!(!temp_dir.path().join("results.txt").exists());
    Ok(())
}

#[test]
fn test_notice_names_file_under_base_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().join("workspace");
    std::fs::create_dir(&base)?;
    std::fs::write(base.join("m.txt"), "abc\n")?;

    let (result, output) =
        run_session_with_output(&base, "out/ciphered.txt", "e\nf\n1\nm.txt\nn\n");

    assert_eq!(result?.files_written, 1);
    let written = base.join("out").join("ciphered.txt");
    let notice = format!("Output written to {}", written.display());
    assert!(answer_lines(&output).contains(&notice.as_str()));
    assert_eq!(std::fs::read_to_string(written)?, "BCD\n");
    assert!(!Path::new("out/ciphered.txt").exists());
    Ok(())
}

#[test]
fn test_unwritable_output_reports_and_continues() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("m.txt"), "abc\n")?;
    // A regular file where the output directory should be.
    std::fs::write(temp_dir.path().join("blocker"), "")?;

    let script = "e\nf\n1\nm.txt\ny\ne\nc\n1\nabc\nn\n";
    let (result, output) =
        run_session_with_output(temp_dir.path(), "blocker/results.txt", script);

    assert_eq!(result?, SessionSummary { cycles: 2, files_written: 0 });
    let failure = output.find("I/O failure:").expect("write failure is reported");
    assert!(output[failure..].contains("another message? (y/n)"));
    assert!(!output.contains("Output written"));
    assert!(answer_lines(&output).contains(&"BCD"));
    Ok(())
}
