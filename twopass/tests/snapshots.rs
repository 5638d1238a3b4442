use twopass::{assemble, AsmError, Diagnostic};

#[test]
fn test_loop() {
    let assembly = assemble(
        include_str!("../programs/loop.optab"),
        include_str!("../programs/loop.asm"),
    )
    .unwrap();

    assert_eq!(assembly.pass_one.labels.get("LOOP"), Some(0x1000));
    assert_eq!(assembly.pass_one.labels.get("FIVE"), Some(0x1003));

    let report = assembly.object_report();
    insta::assert_snapshot!(report.trim_end(), @r###"
    Object Program:
    H ^ PROG ^ 001000
    T ^ 001000 ^ 03 ^ 181003
    E ^ 001000
    "###);
}

#[test]
fn test_sum() {
    let assembly = assemble(
        include_str!("../programs/sum.optab"),
        include_str!("../programs/sum.asm"),
    )
    .unwrap();

    assert_eq!(
        assembly.symbol_report(),
        "Symbol Table:\n\
         FIRST: 2000\n\
         AGAIN: 2009\n\
         ALPHA: 2015\n\
         BETA: 2018\n\
         GAMMA: 201B\n\
         ONE: 201E\n\
         MSG: 2021\n\
         EOL: 2024\n\
         BUFFER: 2025\n\
         \n\nIntermediate Code:\n\
         2000 FIRST LDA ALPHA\n\
         2003  ADD BETA\n\
         2006  STA GAMMA\n\
         2009 AGAIN ADD ONE\n\
         200C  COMP 10\n\
         200F  JLT AGAIN\n\
         2012  RSUB \n\
         2015 ALPHA WORD 5\n\
         2018 BETA WORD 7\n\
         201B GAMMA RESW 1\n\
         201E ONE WORD 1\n\
         2021 MSG BYTE C'SUM'\n\
         2024 EOL BYTE X'0A'\n\
         2025 BUFFER RESB 16\n\
         2035 END\n"
    );

    assert_eq!(
        assembly.pass_one.diagnostics,
        vec![Diagnostic::UnknownOpcode {
            line: 8,
            opcode: "MUL".to_owned()
        }]
    );

    let report = assembly.object_report();
    insta::assert_snapshot!(report.trim_end(), @r###"
    Object Program:
    H ^ SUM ^ 002000
    T ^ 002000 ^ 15 ^ 002015^182018^0C201B^18201E^28000A^382009^4C0000
    E ^ 002000
    "###);
}

#[test]
fn test_without_start() {
    let assembly = assemble("ADD 18", "LOOP ADD LOOP\n").unwrap();

    assert_eq!(assembly.pass_one.labels.get("LOOP"), Some(0));
    assert_eq!(assembly.pass_two, Err(AsmError::UndefinedStartAddress));
    assert_eq!(assembly.object_report(), "Error: Start address not defined.");
}

#[test]
fn test_bad_reservation() {
    let result = assemble("ADD 18", "PROG START 0\nBUF RESB ten\n");

    assert!(matches!(
        result,
        Err(AsmError::MalformedDirectiveOperand { line: 2, .. })
    ));
}

#[test]
fn test_rerun_is_identical() {
    let optab = include_str!("../programs/sum.optab");
    let program = include_str!("../programs/sum.asm");

    let first = assemble(optab, program).unwrap();
    let second = assemble(optab, program).unwrap();

    assert_eq!(first.pass_one, second.pass_one);
    assert_eq!(first.object_report(), second.object_report());
}
