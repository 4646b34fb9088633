use pretty_assertions::assert_eq;

use super::report::{line_col, render, summarize, OutputFormat, ReportOptions};
use crate::lexer::{scanner::tokenize, tokens::TokenKind};

fn rendered(source: &str, options: ReportOptions) -> String {
    let tokens = tokenize(source, None);
    let mut out = Vec::new();
    render(&tokens, source, options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_render_reference() {
    let output = rendered("int x = 5;", ReportOptions::default());
    let rule = "-".repeat(58);
    let expected = format!(
        "\nLexeme Classification:\n{rule}\n\
         Next token is: 1 Next lexeme is int\n\
         Next token is: 36 Next lexeme is x\n\
         Next token is: 11 Next lexeme is =\n\
         Next token is: 35 Next lexeme is 5\n\
         Next token is: 27 Next lexeme is ;\n\
         {rule}\nEnd of tokenization\n"
    );

    assert_eq!(output, expected);
}

#[test]
fn test_render_reference_empty() {
    let output = rendered("   ", ReportOptions::default());
    let rule = "-".repeat(58);

    assert_eq!(
        output,
        format!("\nLexeme Classification:\n{rule}\n{rule}\nEnd of tokenization\n")
    );
}

#[test]
fn test_render_codes() {
    let options = ReportOptions {
        format: OutputFormat::Codes,
        ..Default::default()
    };

    assert_eq!(rendered("a++;", options), "36\n3\n27\n");
}

#[test]
fn test_render_named_with_positions() {
    let options = ReportOptions {
        format: OutputFormat::Named,
        positions: true,
        summary: false,
    };
    let output = rendered("int x;\n  y @", options);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        vec![
            "   1:1     1 Data_Type        int",
            "   1:5    36 Identifier       x",
            "   1:6    27 Semicolon        ;",
            "   2:3    36 Identifier       y",
            "   2:5    37 Unknown          @",
        ]
    );
}

#[test]
fn test_render_summary() {
    let options = ReportOptions {
        format: OutputFormat::Codes,
        positions: false,
        summary: true,
    };
    let output = rendered("x = y = 1;", options);

    assert!(output.ends_with("\nSummary:\n11 Assign_Op        2\n27 Semicolon        1\n35 Integer_Literal  1\n36 Identifier       2\n"));
}

#[test]
fn test_summarize_orders_by_code() {
    let tokens = tokenize("b = a + 1 + 2;", None);

    assert_eq!(
        summarize(&tokens),
        vec![
            (TokenKind::Assign, 1),
            (TokenKind::Plus, 2),
            (TokenKind::Semicolon, 1),
            (TokenKind::IntegerLiteral, 2),
            (TokenKind::Identifier, 2),
        ]
    );
    assert!(summarize(&[]).is_empty());
}

#[test]
fn test_line_col() {
    let source = "ab\ncd é x";

    assert_eq!(line_col(source, 0), (1, 1));
    assert_eq!(line_col(source, 4), (2, 2));
    assert_eq!(line_col(source, 9), (2, 6));
}
