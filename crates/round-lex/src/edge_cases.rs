//! Edge case tests for round-lex

#[cfg(test)]
mod tests {
    use crate::{
        BigNumberStrategy, LexConfig, LexError, Lexer, Number, Operator, Production, SpanScanner,
        StandardSpans, StringLiteral, SyntaxError, Token, TokenStream,
    };
    use num_bigint::BigInt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    fn tokens(lexer: &Lexer, source: &str) -> Vec<Token> {
        let stream = lexer.lex(source).unwrap();
        stream.tokens().iter().map(|t| t.token().clone()).collect()
    }

    fn lazy() -> Lexer {
        Lexer::new(LexConfig::new().production(Production::Lazy))
    }

    /// Standard spans that count how often an identifier end was requested.
    struct CountingSpans {
        calls: Arc<AtomicUsize>,
    }

    impl SpanScanner for CountingSpans {
        fn is_identifier_start(&self, c: char) -> bool {
            StandardSpans.is_identifier_start(c)
        }

        fn is_digit_start(&self, c: char) -> bool {
            StandardSpans.is_digit_start(c)
        }

        fn identifier_end(&self, text: &str, offset: usize) -> usize {
            self.calls.fetch_add(1, Ordering::SeqCst);
            StandardSpans.identifier_end(text, offset)
        }

        fn number_end(&self, text: &str, offset: usize) -> Option<(usize, bool)> {
            StandardSpans.number_end(text, offset)
        }

        fn string_literal(&self, text: &str, offset: usize) -> Option<StringLiteral> {
            StandardSpans.string_literal(text, offset)
        }
    }

    // ==================== EMPTY INPUT ====================

    #[test]
    fn test_edge_whitespace_only() {
        for source in ["", " ", "\t\r\n", "\u{0}\u{1f} \n\n  "] {
            assert!(tokens(&Lexer::default(), source).is_empty(), "{:?}", source);

            let mut stream = lazy().lex(source).unwrap();
            assert!(!stream.has_next().unwrap());
            assert!(stream.is_exhausted());
            assert_eq!(stream.len(), 0);
        }
    }

    #[test]
    fn test_edge_empty_stream_navigation() {
        let mut stream = Lexer::default().lex("").unwrap();
        assert!(!stream.has_previous());
        assert!(stream.get().is_err());
        let err = stream.next().unwrap_err();
        assert_eq!(err.to_string(), "wrong syntax in your empty expression");
    }

    // ==================== INTERNING ====================

    #[test]
    fn test_edge_interning_within_lexer() {
        let lexer = Lexer::default();
        let a = tokens(&lexer, "foo");
        let b = tokens(&lexer, "bar foo");
        match (&a[0], &b[1]) {
            (Token::Identifier(x), Token::Identifier(y)) => assert!(Arc::ptr_eq(x, y)),
            _ => panic!("expected identifiers"),
        }
    }

    #[test]
    fn test_edge_interning_across_lexers() {
        let a = tokens(&Lexer::default(), "foo");
        let b = tokens(&Lexer::default(), "foo");
        assert_eq!(a[0], b[0]);
        match (&a[0], &b[0]) {
            (Token::Identifier(x), Token::Identifier(y)) => assert!(!Arc::ptr_eq(x, y)),
            _ => panic!("expected identifiers"),
        }
    }

    #[test]
    fn test_edge_interning_across_threads() {
        let lexer = Lexer::default();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let lexer = lexer.clone();
                thread::spawn(move || {
                    let source = format!("shared local{} shared", i);
                    tokens(&lexer, &source)[0].clone()
                })
            })
            .collect();

        let results: Vec<Token> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let Token::Identifier(first) = &results[0] else {
            panic!("expected identifier");
        };
        for token in &results[1..] {
            let Token::Identifier(other) = token else {
                panic!("expected identifier");
            };
            assert!(Arc::ptr_eq(first, other));
        }
        assert_eq!(lexer.stats().identifiers.count, 9);
    }

    // ==================== KEYWORDS ====================

    #[test]
    fn test_edge_keyword_after_cached_identifier() {
        let mut lexer = Lexer::default();
        for _ in 0..3 {
            let plain = tokens(&lexer, "if");
            assert!(plain[0].is_identifier());
            assert!(!plain[0].is_keyword());
        }

        lexer.set_config(LexConfig::new().with_keyword("if"));
        for _ in 0..3 {
            assert!(tokens(&lexer, "if")[0].is_keyword());
        }
    }

    // ==================== LONGEST MATCH ====================

    #[test]
    fn test_edge_arrow() {
        let t = tokens(&Lexer::default(), "a->b");
        assert_eq!(t.len(), 3);
        assert!(t[0].is_identifier());
        assert_eq!(t[1].operator(), Some(Operator::Arrow));
        assert!(t[2].is_identifier());
    }

    #[test]
    fn test_edge_triple_dot() {
        let t = tokens(&Lexer::default(), "a...b");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].operator(), Some(Operator::TripleDot));
    }

    // ==================== NUMERIC STRATEGY ====================

    #[test]
    fn test_edge_int_overflow_per_strategy() {
        let number = |strategy| {
            let lexer = Lexer::new(LexConfig::new().big_number_strategy(strategy));
            tokens(&lexer, "2147483648")[0].number().cloned().unwrap()
        };
        assert_eq!(number(BigNumberStrategy::None), Number::Long(2_147_483_648));
        assert_eq!(number(BigNumberStrategy::Range), Number::Long(2_147_483_648));
        assert_eq!(
            number(BigNumberStrategy::Always),
            Number::BigInteger(BigInt::from(2_147_483_648u64))
        );
    }

    // ==================== NAVIGATION ====================

    #[test]
    fn test_edge_mark_reset() {
        let mut stream = Lexer::default().lex("a b c d e f").unwrap();
        stream.next().unwrap();
        stream.next().unwrap();
        stream.mark();
        for _ in 0..3 {
            stream.next().unwrap();
        }
        stream.reset();
        assert_eq!(stream.position(), 2);
        assert_eq!(stream.get().unwrap().raw(), "c");

        stream.reset();
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_edge_lazy_mark_reset_does_not_rescan() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = LexConfig::new()
            .production(Production::Lazy)
            .spans(CountingSpans {
                calls: Arc::clone(&calls),
            });
        let mut stream = Lexer::new(config).lex("a b c").unwrap();
        stream.mark();
        for _ in 0..3 {
            stream.next().unwrap();
        }
        stream.reset();
        for _ in 0..3 {
            stream.next().unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_edge_lazy_scans_at_most_consumed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = LexConfig::new()
            .production(Production::Lazy)
            .spans(CountingSpans {
                calls: Arc::clone(&calls),
            });
        let mut stream = Lexer::new(config).lex("a b c d e f g h").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        for k in 1..=4 {
            assert!(stream.has_next().unwrap());
            assert!(stream.has_next().unwrap());
            stream.next().unwrap();
            assert!(stream.len() <= k);
            assert!(calls.load(Ordering::SeqCst) <= k);
        }
        assert!(!stream.is_exhausted());
    }

    #[test]
    fn test_edge_lazy_error_surfaces_late() {
        let mut stream = lazy().lex("a b ?").unwrap();
        stream.next().unwrap();
        stream.next().unwrap();
        let err = stream.next().unwrap_err();
        let lex = err.as_lex().unwrap();
        assert_eq!(lex.offset(), 4);
    }

    #[test]
    fn test_edge_copy_independence() {
        let mut stream = Lexer::default().lex("a b c d e f").unwrap();
        stream.next().unwrap();
        let mut fork = stream.copy();
        for _ in 0..3 {
            fork.next().unwrap();
        }
        assert_eq!(fork.position(), 4);
        assert_eq!(stream.position(), 1);

        fork.mark();
        assert_eq!(stream.position(), 1);
        stream.reset();
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_edge_stream_sent_to_thread() {
        let stream = lazy().lex("x y z").unwrap();
        let mut fork = stream.copy();
        let count = thread::spawn(move || {
            let mut n = 0;
            while fork.has_next().unwrap() {
                fork.next().unwrap();
                n += 1;
            }
            n
        })
        .join()
        .unwrap();
        assert_eq!(count, 3);
        assert_eq!(stream.len(), 0);
    }

    // ==================== END TO END ====================

    #[test]
    fn test_edge_end_to_end() {
        let t = tokens(&Lexer::default(), "x + 1 == 2 // done");
        assert_eq!(t.len(), 6);
        assert_eq!(t[0].identifier().map(|i| i.name()), Some("x"));
        assert_eq!(t[1].operator(), Some(Operator::Add));
        assert_eq!(t[2].number(), Some(&Number::Int(1)));
        assert_eq!(t[3].operator(), Some(Operator::Eq));
        assert_eq!(t[4].number(), Some(&Number::Int(2)));
        assert_eq!(t[5].comment().map(|c| c.raw()), Some("// done"));
    }

    #[test]
    fn test_edge_unterminated_string_at_start() {
        let err = Lexer::default().lex("'unterminated").unwrap_err();
        assert_eq!(err.offset(), 0);
        assert_eq!((err.line(), err.column()), (1, 1));
    }

    #[test]
    fn test_edge_unterminated_comment_at_start() {
        let err = Lexer::default().lex("/* unterminated").unwrap_err();
        assert_eq!(err.offset(), 0);
        assert_eq!(
            err.message(),
            "unterminated comment in your expression, at line 1 col 1"
        );
    }

    // ==================== PRODUCERS ====================

    #[test]
    fn test_edge_custom_lex_producer() {
        let config = LexConfig::new().name("Ausdruck").lex_error_producer(|config, failure| {
            let message = format!(
                "Fehler in {} bei Zeichen {}",
                config.subject(),
                failure.offset
            );
            LexError::new(failure, message)
        });
        let err = Lexer::new(config).lex("1 ?").unwrap_err();
        assert_eq!(err.to_string(), "Fehler in Ausdruck bei Zeichen 2");
    }

    #[test]
    fn test_edge_custom_syntax_producer() {
        let config = LexConfig::new().syntax_error_producer(|_, failure| {
            let message = match &failure.token {
                Some(info) => format!("unexpected '{}'", info.raw()),
                None => "nothing to parse".to_string(),
            };
            SyntaxError::new(failure, message)
        });
        let lexer = Lexer::new(config);

        let mut stream = lexer.lex("(a").unwrap();
        stream.next().unwrap();
        stream.next().unwrap();
        let err = stream.next().unwrap_err();
        assert_eq!(err.to_string(), "unexpected 'a'");

        let stream = lexer.lex("").unwrap();
        assert_eq!(stream.syntax_error().to_string(), "nothing to parse");
    }

    #[test]
    fn test_edge_parser_style_backtracking() {
        fn call(stream: &mut TokenStream) -> crate::Result<usize> {
            stream.mark();
            if !stream.next()?.is_identifier() || !stream.next()?.is_left_paren() {
                stream.reset();
                return stream.wrong_syntax();
            }
            let mut args = 0;
            while !stream.next()?.is_right_paren() {
                args += 1;
            }
            Ok(args)
        }

        let mut stream = Lexer::default().lex("f(a, b)").unwrap();
        assert_eq!(call(&mut stream).unwrap(), 3);

        let mut stream = Lexer::default().lex("1 + 2").unwrap();
        let err = call(&mut stream).unwrap_err();
        assert!(err.as_syntax().is_some());
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let t = tokens(&Lexer::default(), &format!("{} = 1", name));
        assert_eq!(t[0].raw(), name);
    }
}
