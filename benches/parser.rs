#[macro_use]
extern crate bencher;

use bencher::Bencher;

fn graphql_ast_lex(bench: &mut Bencher) {
    use graphql_frontend::ast::*;
    let source = Source::from(QUERY);
    bench.iter(|| {
        let ctx = ASTContext::new();
        let mut lexer = Lexer::new(&ctx, &source);
        while let Ok(token) = lexer.next_token() {
            if token.kind == TokenKind::EndOfFile {
                break;
            }
        }
    });
}

fn graphql_ast_parse(bench: &mut Bencher) {
    use graphql_frontend::ast::*;
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse(&ctx, QUERY).ok();
    });
}

fn graphql_ast_parse_no_location(bench: &mut Bencher) {
    use graphql_frontend::ast::*;
    let options = ParseOptions {
        no_location: true,
        ..ParseOptions::default()
    };
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse_with_options(&ctx, QUERY, options).ok();
    });
}

fn graphql_ast_visit(bench: &mut Bencher) {
    use graphql_frontend::ast::*;
    use graphql_frontend::visit::*;

    #[derive(Default)]
    struct CountFields;

    impl<'a> Visitor<'a, usize> for CountFields {
        fn enter_field(
            &mut self,
            count: &mut usize,
            _field: &'a Field<'a>,
            _info: &VisitInfo,
        ) -> VisitFlow {
            *count += 1;
            VisitFlow::Next
        }
    }

    let ctx = ASTContext::new();
    let ast = Document::parse(&ctx, QUERY).unwrap();
    bench.iter(|| {
        let mut count = 0;
        ast.visit(&mut count, &mut CountFields);
        count
    });
}

fn graphql_ast_validate(bench: &mut Bencher) {
    use graphql_frontend::ast::*;
    use graphql_frontend::schema::*;
    use graphql_frontend::validate::*;

    let ctx = ASTContext::new();
    let introspection: IntrospectionQuery = serde_json::from_str(INTROSPECTION).unwrap();
    let schema = ctx.alloc(introspection.build_client_schema(&ctx));
    let ast = Document::parse(&ctx, TODO_QUERY).unwrap();
    bench.iter(|| ast.validate(schema).unwrap());
}

fn graphql_ast_validate_kitchen_sink(bench: &mut Bencher) {
    use graphql_frontend::ast::*;
    use graphql_frontend::schema::*;
    use graphql_frontend::validate::*;

    let ctx = ASTContext::new();
    let introspection: IntrospectionQuery = serde_json::from_str(INTROSPECTION).unwrap();
    let schema = ctx.alloc(introspection.build_client_schema(&ctx));
    let ast = Document::parse(&ctx, QUERY).unwrap();
    bench.iter(|| ast.validate(schema).unwrap_err());
}

fn graphql_load_introspection(bench: &mut Bencher) {
    use graphql_frontend::ast::ASTContext;
    use graphql_frontend::schema::*;

    let ctx = ASTContext::new();

    bench.iter(|| {
        let introspection: IntrospectionQuery = serde_json::from_str(INTROSPECTION).unwrap();
        introspection.build_client_schema(&ctx);
    });
}

benchmark_group!(
    parse,
    graphql_ast_lex,
    graphql_ast_parse,
    graphql_ast_parse_no_location,
    graphql_ast_visit,
    graphql_ast_validate,
    graphql_ast_validate_kitchen_sink,
    graphql_load_introspection
);

benchmark_main!(parse);

static QUERY: &str = include_str!("../fixture/kitchen_sink.graphql");
static INTROSPECTION: &str = include_str!("../fixture/introspection_query.json");

static TODO_QUERY: &str = r#"
query Todos($first: Int, $priority: Priority = HIGH) {
  todos {
    ...TodoFields
    author {
      name
      todos(first: $first) { id }
    }
  }
  search(text: "groceries") {
    __typename
    ... on Todo { ...TodoFields }
    ... on Author { id name }
  }
  me @include(if: true) { id }
}

mutation AddTodo($input: TodoInput!) {
  addTodo(input: $input) { ...TodoFields }
}

fragment TodoFields on Todo {
  id
  text
  done
}
"#;
