use minibasic::lang::{lex, token::*, ErrorKind};

#[test]
fn test_let_statement() {
    let tokens = lex("10 LET X = 5").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Literal(Literal::Integer("10".to_string())),
            Token::Word(Word::Let),
            Token::Ident("X".to_string()),
            Token::Operator(Operator::Equal),
            Token::Literal(Literal::Integer("5".to_string())),
        ]
    );
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Literal,
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Literal,
        ]
    );
}

#[test]
fn test_string_is_one_token() {
    let tokens = lex("20 PRINT \"a,b(c\"").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Literal(Literal::Integer("20".to_string())),
            Token::Word(Word::Print),
            Token::Literal(Literal::String("\"a,b(c\"".to_string())),
        ]
    );
}

#[test]
fn test_escaped_quote_does_not_terminate() {
    let tokens = lex("10 LET S = \"say \\\"hi\\\"\"").unwrap();
    assert_eq!(
        tokens.last(),
        Some(&Token::Literal(Literal::String(
            "\"say \\\"hi\\\"\"".to_string()
        )))
    );
}

#[test]
fn test_unterminated_string() {
    let e = lex("10 LET S = \"oops").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::UnterminatedStringLiteral);
}

#[test]
fn test_two_char_operators() {
    let tokens = lex("10 IF A >= B THEN").unwrap();
    assert!(tokens.contains(&Token::Operator(Operator::GreaterEqual)));
    let tokens = lex("10 IF A<>B THEN").unwrap();
    assert_eq!(
        tokens[2..5],
        [
            Token::Ident("A".to_string()),
            Token::Operator(Operator::NotEqual),
            Token::Ident("B".to_string()),
        ]
    );
    let tokens = lex("A<=B").unwrap();
    assert_eq!(tokens[1], Token::Operator(Operator::LessEqual));
}

#[test]
fn test_adjacent_single_char_operators() {
    // "=<" is not an operator; it lexes as "=" then "<"
    let tokens = lex("A=<B").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Ident("A".to_string()),
            Token::Operator(Operator::Equal),
            Token::Operator(Operator::Less),
            Token::Ident("B".to_string()),
        ]
    );
}

#[test]
fn test_separators_split_words() {
    let tokens = lex("10 LET X=F(A,B)").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Literal(Literal::Integer("10".to_string())),
            Token::Word(Word::Let),
            Token::Ident("X".to_string()),
            Token::Operator(Operator::Equal),
            Token::Ident("F".to_string()),
            Token::LParen,
            Token::Ident("A".to_string()),
            Token::Comma,
            Token::Ident("B".to_string()),
            Token::RParen,
        ]
    );
}

#[test]
fn test_decimal_literal() {
    let tokens = lex("10 LET PI = 3.14").unwrap();
    assert_eq!(
        tokens.last(),
        Some(&Token::Literal(Literal::Decimal("3.14".to_string())))
    );
}

#[test]
fn test_go_to_is_two_words() {
    let tokens = lex("10 GO TO 20").unwrap();
    assert_eq!(tokens[1], Token::Word(Word::Go));
    assert_eq!(tokens[2], Token::Word(Word::To));
}

#[test]
fn test_remark_swallows_rest_of_line() {
    let tokens = lex("100 REM (unbalanced \"junk").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Literal(Literal::Integer("100".to_string())),
            Token::Word(Word::Rem),
            Token::Comment("(unbalanced \"junk".to_string()),
        ]
    );
    assert_eq!(tokens[2].kind(), TokenKind::Comment);
}

#[test]
fn test_remark_delimited_by_separator() {
    // the "(" right after REM belongs to the remark, not the token stream
    let tokens = lex("10 REM(x").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Literal(Literal::Integer("10".to_string())),
            Token::Word(Word::Rem),
            Token::Comment("(x".to_string()),
        ]
    );
}

#[test]
fn test_remark_delimited_by_quote() {
    let tokens = lex("10 REM\"oops").unwrap();
    assert_eq!(tokens[2], Token::Comment("\"oops".to_string()));
}

#[test]
fn test_remark_delimited_by_operator() {
    let tokens = lex("10 REM=A+B").unwrap();
    assert_eq!(tokens[2], Token::Comment("=A+B".to_string()));
}

#[test]
fn test_lone_dot_is_a_separator() {
    let tokens = lex("10 READ . .5").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Literal(Literal::Integer("10".to_string())),
            Token::Word(Word::Read),
            Token::Dot,
            Token::Literal(Literal::Decimal(".5".to_string())),
        ]
    );
    assert_eq!(tokens[2].kind(), TokenKind::Separator);
}

#[test]
fn test_display_round_trip() {
    let tokens = lex("10 LET X = (A + 3.5) * \"B\"").unwrap();
    let text: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(text.join(" "), "10 LET X = ( A + 3.5 ) * \"B\"");
}
