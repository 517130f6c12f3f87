use hackasm::{assemble, assemble_program, ErrorKind};

#[test]
fn test_add() {
    let program_text = include_str!("../../programs/add.asm");
    let assembled = assemble_program(program_text).unwrap();

    insta::assert_snapshot!(assembled, @r###"
    0000000000000010
    1110110000010000
    0000000000000011
    1110000010010000
    0000000000000000
    1110001100001000
    "###);
}

#[test]
fn test_max() {
    let program_text = include_str!("../../programs/max.asm");
    let assembled = assemble_program(program_text).unwrap();

    insta::assert_snapshot!(assembled, @r###"
    0000000000000000
    1111110000010000
    0000000000000001
    1111010011010000
    0000000000001010
    1110001100000001
    0000000000000001
    1111110000010000
    0000000000001100
    1110101010000111
    0000000000000000
    1111110000010000
    0000000000000010
    1110001100001000
    0000000000001110
    1110101010000111
    "###);
}

#[test]
fn test_rect() {
    let program_text = include_str!("../../programs/rect.asm");
    let assembled = assemble_program(program_text).unwrap();

    insta::assert_snapshot!(assembled, @r###"
    0000000000000000
    1111110000010000
    0000000000010111
    1110001100000110
    0000000000010000
    1110001100001000
    0100000000000000
    1110110000010000
    0000000000010001
    1110001100001000
    0000000000010001
    1111110000100000
    1110111010001000
    0000000000010001
    1111110000010000
    0000000000100000
    1110000010010000
    0000000000010001
    1110001100001000
    0000000000010000
    1111110010011000
    0000000000001010
    1110001100000001
    0000000000010111
    1110101010000111
    "###);
}

#[test]
fn test_line_count() {
    let program_text = include_str!("../../programs/rect.asm");
    let assembled = assemble_program(program_text).unwrap();

    assert!(!assembled.ends_with('\n'));
    assert_eq!(assembled.lines().count(), 25);
    assert!(assembled
        .lines()
        .all(|l| l.len() == 16 && l.chars().all(|c| c == '0' || c == '1')));
}

#[test]
fn test_rect_symbols() {
    let program_text = include_str!("../../programs/rect.asm");
    let assembled = assemble(program_text).unwrap();

    assert_eq!(assembled.symbols.get_address("LOOP"), Some(10));
    assert_eq!(assembled.symbols.get_address("INFINITE_LOOP"), Some(23));
    assert_eq!(assembled.symbols.get_address("counter"), Some(16));
    assert_eq!(assembled.symbols.get_address("address"), Some(17));
}

#[test]
fn test_repeatable() {
    let program_text = include_str!("../../programs/max.asm");
    let first = assemble(program_text).unwrap();
    let second = assemble(program_text).unwrap();

    assert_eq!(first.to_hack(), second.to_hack());
    assert_eq!(
        first.debug_info("max").to_string().unwrap(),
        second.debug_info("max").to_string().unwrap()
    );
}

#[test]
fn test_error_aborts() {
    let program_text = "@0\nD=M\n(LOOP)\n@LOOP\n(LOOP)\n0;JMP\n";
    let err = assemble_program(program_text).unwrap_err();

    assert_eq!(err.line_no, 5);
    assert!(matches!(err.kind, ErrorKind::DuplicateSymbol { .. }));
}

#[test]
fn test_literal_out_of_range() {
    let err = assemble_program("@40000\nD=A").unwrap_err();

    assert_eq!(err.line_no, 1);
    assert_eq!(err.kind, ErrorKind::LiteralOutOfRange("40000".to_owned()));
}

#[test]
fn test_loose_symbol_names() {
    let assembled = assemble_program("@1abc\nD=A\n@foo-bar\n@1abc").unwrap();

    insta::assert_snapshot!(assembled, @r###"
    0000000000010000
    1110110000010000
    0000000000010001
    0000000000010000
    "###);
}
