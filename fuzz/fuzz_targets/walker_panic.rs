#![no_main]
use hemline_common::CollectingReporter;
use hemline_syntax::{NodeKind, TokenKind, TreeBuilder};
use hemline_style::StyleWalker;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode the bytes into a crude build script: the low nibble picks an
    // operation (open/close a group, break the line, or append a token of
    // some kind), the high nibble picks how far the column advances.
    // Structural mistakes are rejected by the builder and end the run; the
    // property under test is that any tree the builder accepts never
    // panics the walker.
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::Root);
    let mut line = 1u32;
    let mut column = 0u32;
    let mut open_groups = 0usize;

    for &byte in data {
        let advance = u32::from(byte >> 4) + 1;
        let result = match byte & 0x0f {
            0 => {
                builder.start_node(NodeKind::Group);
                open_groups += 1;
                Ok(())
            }
            1 if open_groups > 0 => {
                open_groups -= 1;
                builder.finish_node()
            }
            2 => {
                line += 1;
                column = 0;
                Ok(())
            }
            3 => builder.token(TokenKind::OpenParen, "(", line, column).map(|_| ()),
            4 => builder.token(TokenKind::CloseParen, ")", line, column).map(|_| ()),
            5 => builder.token(TokenKind::Comma, ",", line, column).map(|_| ()),
            6 => builder.token(TokenKind::Colon, ":", line, column).map(|_| ()),
            7 => builder.token(TokenKind::Operator, "+", line, column).map(|_| ()),
            8 => builder.token(TokenKind::Number, "42", line, column).map(|_| ()),
            _ => builder.token(TokenKind::Word, "word", line, column).map(|_| ()),
        };
        if result.is_err() {
            return;
        }
        column += advance + 4;
    }

    for _ in 0..open_groups {
        if builder.finish_node().is_err() {
            return;
        }
    }
    if builder.finish_node().is_err() {
        return;
    }
    let Ok(tree) = builder.finish() else {
        return;
    };

    let reporter = CollectingReporter::new();
    StyleWalker::new(&tree, &reporter).run();
    let _ = reporter.take_sorted();
});
