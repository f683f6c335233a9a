//! Shared fixtures for extraction pipeline tests
//!
//! Fixture text mirrors the layout produced by converting a university
//! result sheet: a banner, then one block per student with identity fields on
//! the first line and one line per subject.

mod segmenter_tests;
mod subject_table_tests;

/// Single block used by the headline scenarios
pub fn single_student_block(sgpa: &str) -> String {
    format!(
        "SEAT NO.: T100 NAME : JOHN DOE MOTHER : JANE DOE PRN :AB123 THIRD YEAR SGPA : {sgpa} TOTAL CREDITS EARNED : 20\n\
         310241 DATABASE MANAGEMENT SYSTEMS 025/030 050/070 075/100 A\n"
    )
}

/// Three-student document with a banner, a failing subject and an absent score
pub fn create_test_document() -> String {
    r#"SAVITRIBAI PHULE PUNE UNIVERSITY
T.E. (2019 PATTERN) EXAMINATION MAY 2024
SEAT NO.: T190010001 NAME : PATIL ANANYA RAJESH MOTHER : SUNITA PRN :72012345L
310241 DATABASE MANAGEMENT SYSTEMS 025/030 050/070 075/100 04 A 10 40
310242 THEORY OF COMPUTATION 026/030 055/070 081/100 04 A+ 10 40
310243 SYSTEMS PROGRAMMING & OS 020/030 045/070 065/100 04 B+ 08 32
THIRD YEAR SGPA : 9.12 TOTAL CREDITS EARNED : 22
SEAT NO.: T190010002 NAME : KULKARNI OMKAR VIJAY MOTHER : MEENA PRN :72012346M
310241 DATABASE MANAGEMENT SYSTEMS 010/030 020/070 030/100 04 F 00 00
310242 THEORY OF COMPUTATION 022/030 040/070 062/100 04 B 07 28
310243 SYSTEMS PROGRAMMING & OS 021/030 044/070 065/100 04 B+ 08 32
THIRD YEAR SGPA : 7.05 TOTAL CREDITS EARNED : 18
SEAT NO.: T190010003 NAME : SHAIKH AYESHA MOTHER : RUKSANA PRN :72012347N
310241 DATABASE MANAGEMENT SYSTEMS AB/030 AB/070 AB/100 04 AB 00 00
310242 THEORY OF COMPUTATION 024/030 050/070 074/100 04 A 09 36
THIRD YEAR SGPA : -- TOTAL CREDITS EARNED : 4
"#
    .to_string()
}
