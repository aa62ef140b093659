use std::io::Cursor;

use csvnorm_core::pipeline::{run, PipelineSummary};

const HEADER: &str = "Timestamp,Address,ZIP,FullName,FooDuration,BarDuration,TotalDuration,Notes";

fn run_pipeline(input: &str) -> (String, PipelineSummary) {
    let mut output = Vec::new();
    let summary = run(Cursor::new(input.as_bytes()), &mut output).expect("pipeline run failed");
    let text = String::from_utf8(output).expect("output was not UTF-8");
    (text, summary)
}

#[test]
fn passes_header_through_and_normalizes_rows() {
    let input = format!(
        "{HEADER}\n\
         3/14/23 2:05:09 PM,123 Main St,94105,jane q public,1:02:03.500,0:00:10.750,0,ok\n\
         12/1/22 9:00:00 AM,9 Oak Ave,123,sam spade,0:00:01.000,0:00:02.000,0,fine\n"
    );

    let (output, summary) = run_pipeline(&input);

    let expected = format!(
        "{HEADER}\n\
         2023-03-14T17:05:09-04:00,123 Main St,94105,Jane Q Public,3723.5,10.75,3734.25,ok\n\
         2022-12-01T12:00:00-05:00,9 Oak Ave,00123,Sam Spade,1,2,3,fine\n"
    );
    assert_eq!(output, expected);
    assert_eq!(summary.rows_emitted, 2);
    assert_eq!(summary.rows_dropped, 0);
}

#[test]
fn header_is_never_validated() {
    let (output, summary) = run_pipeline("not,a,real,header\n");
    assert_eq!(output, "not,a,real,header\n");
    assert_eq!(summary.rows_emitted, 0);
    assert_eq!(summary.rows_dropped, 0);
}

#[test]
fn drops_bad_rows_and_keeps_survivor_order() {
    let input = format!(
        "{HEADER}\n\
         3/14/23 2:05:09 PM,first,94105,a b,0:00:01.000,0:00:01.000,0,one\n\
         3/14/23 2:05:09 PM,second,123456,c d,0:00:01.000,0:00:01.000,0,two\n\
         3/14/23 2:05:09 PM,third,321,e f,0:00:01.000,0:00:01.000,0,three\n"
    );

    let (output, summary) = run_pipeline(&input);

    assert_eq!(summary.rows_emitted, 2);
    assert_eq!(summary.rows_dropped, 1);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER);
    assert!(lines[1].contains(",first,"));
    assert!(lines[2].contains(",third,"));
    assert!(!output.contains("second"));
}

#[test]
fn empty_input_produces_empty_output() {
    let (output, summary) = run_pipeline("");
    assert!(output.is_empty());
    assert_eq!(summary, PipelineSummary::default());
}

#[test]
fn header_only_input_emits_header_only() {
    let (output, summary) = run_pipeline(&format!("{HEADER}\n"));
    assert_eq!(output, format!("{HEADER}\n"));
    assert_eq!(summary.rows_emitted, 0);
}

#[test]
fn final_row_without_newline_is_still_processed() {
    let input = format!(
        "{HEADER}\n3/14/23 2:05:09 PM,addr,94105,a b,0:00:01.000,0:00:01.000,0,end"
    );
    let (output, summary) = run_pipeline(&input);
    assert!(output.ends_with(",end\n"));
    assert_eq!(summary.rows_emitted, 1);
}

#[test]
fn blank_lines_are_neither_rows_nor_drops() {
    let input = format!(
        "{HEADER}\n\
         \n\
         3/14/23 2:05:09 PM,addr,94105,a b,0:00:01.000,0:00:01.000,0,ok\n\
         \n"
    );
    let (output, summary) = run_pipeline(&input);
    assert_eq!(summary.rows_emitted, 1);
    assert_eq!(summary.rows_dropped, 0);
    assert_eq!(output.lines().count(), 2);
}

#[test]
fn quoted_newline_spans_physical_lines() {
    let input = format!(
        "{HEADER}\n\
         3/14/23 2:05:09 PM,addr,94105,a b,0:00:01.000,0:00:01.000,0,\"line one\nline two\"\n"
    );

    let (output, summary) = run_pipeline(&input);

    assert_eq!(summary.rows_emitted, 1);
    assert_eq!(summary.rows_dropped, 0);
    assert!(output.contains("\"line one\nline two\""));
}

#[test]
fn drop_is_invisible_in_primary_output() {
    let input = format!(
        "{HEADER}\n\
         not a timestamp,addr,94105,a b,0:00:01.000,0:00:01.000,0,bad\n"
    );
    let (output, summary) = run_pipeline(&input);
    assert_eq!(output, format!("{HEADER}\n"));
    assert_eq!(summary.rows_dropped, 1);
}
