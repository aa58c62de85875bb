use sql_recover::extract_sql;

#[cfg(test)]
mod assignment_extraction {
    use super::*;

    #[test]
    fn test_simple_string_declaration() {
        let code = r#"string query = "SELECT id FROM users";"#;
        assert_eq!(extract_sql(code), vec!["SELECT id FROM users"]);
    }

    #[test]
    fn test_concatenated_declaration() {
        let code = "var query = \"SELECT id, name \" +\n\
                    \"FROM users \" +\n\
                    \"WHERE active = 1\";";
        assert_eq!(
            extract_sql(code),
            vec!["SELECT id, name FROM users WHERE active = 1"]
        );
    }

    #[test]
    fn test_command_text_with_verbatim_literal() {
        let code = "cmd.CommandText = @\"SELECT *\nFROM logs\nWHERE level = 'ERROR'\";";
        assert_eq!(
            extract_sql(code),
            vec!["SELECT *\nFROM logs\nWHERE level = 'ERROR'"]
        );
    }

    #[test]
    fn test_verbatim_doubled_quotes_decoded() {
        let code = r#"string q = @"SELECT ""name"" FROM t";"#;
        assert_eq!(extract_sql(code), vec!["SELECT \"name\" FROM t"]);
    }

    #[test]
    fn test_assignment_inside_comment_is_ignored() {
        let code = "// string fake = \"NOT REAL\";\nstring q = \"SELECT 1\";";
        assert_eq!(extract_sql(code), vec!["SELECT 1"]);
    }
}

#[cfg(test)]
mod accumulator_extraction {
    use super::*;

    #[test]
    fn test_sequential_appends_merge_to_one_string() {
        let code = "var sb = new StringBuilder();\n\
                    sb.Append(\"SELECT \");\n\
                    sb.Append(\"* FROM t\");\n\
                    sb.Append(\" WHERE 1=1\");\n\
                    string result = sb.ToString();";
        assert_eq!(extract_sql(code), vec!["SELECT * FROM t WHERE 1=1"]);
    }

    #[test]
    fn test_if_else_yields_one_string_per_arm() {
        let code = "var sb = new StringBuilder();\n\
                    sb.Append(\"SELECT * FROM t\");\n\
                    if (a)\n\
                    {\n\
                        sb.Append(\" WHERE x=1\");\n\
                    }\n\
                    else\n\
                    {\n\
                        sb.Append(\" WHERE x=2\");\n\
                    }";
        assert_eq!(
            extract_sql(code),
            vec!["SELECT * FROM t WHERE x=1", "SELECT * FROM t WHERE x=2"]
        );
    }

    #[test]
    fn test_three_arm_chain_with_shared_prefix_and_suffix() {
        let code = "var sb = new StringBuilder();\n\
                    sb.AppendLine(\"SELECT *\");\n\
                    sb.AppendLine(\"FROM orders\");\n\
                    if (byDate)\n\
                    {\n\
                        sb.AppendLine(\"WHERE created >= @from\");\n\
                    }\n\
                    else if (byUser)\n\
                    {\n\
                        sb.AppendLine(\"WHERE user_id = @user\");\n\
                    }\n\
                    else\n\
                    {\n\
                        sb.AppendLine(\"WHERE 1=1\");\n\
                    }\n\
                    sb.Append(\"ORDER BY id\");";
        assert_eq!(
            extract_sql(code),
            vec![
                "SELECT *\nFROM orders\nWHERE created >= @from\nORDER BY id",
                "SELECT *\nFROM orders\nWHERE user_id = @user\nORDER BY id",
                "SELECT *\nFROM orders\nWHERE 1=1\nORDER BY id",
            ]
        );
    }

    #[test]
    fn test_appendline_adds_exactly_one_terminator() {
        let code = "var sb = new StringBuilder();\n\
                    sb.AppendLine(\"X\");\n\
                    sb.Append(\"Y\");";
        assert_eq!(extract_sql(code), vec!["X\nY"]);
    }

    #[test]
    fn test_second_chain_folds_into_tail() {
        // Only the first qualifying chain is decomposed; appends in a later
        // independent chain become suffix text for every arm.
        let code = "var sb = new StringBuilder();\n\
                    sb.Append(\"A\");\n\
                    if (x)\n\
                    {\n\
                        sb.Append(\"B\");\n\
                    }\n\
                    sb.Append(\"C\");\n\
                    if (y)\n\
                    {\n\
                        sb.Append(\"D\");\n\
                    }";
        assert_eq!(extract_sql(code), vec!["ABCD"]);
    }

    #[test]
    fn test_accumulators_are_independent() {
        let code = "var first = new StringBuilder();\n\
                    var second = new StringBuilder();\n\
                    first.Append(\"SELECT a FROM t1\");\n\
                    second.Append(\"SELECT b FROM t2\");";
        assert_eq!(
            extract_sql(code),
            vec!["SELECT a FROM t1", "SELECT b FROM t2"]
        );
    }

    #[test]
    fn test_interpolated_argument_keeps_brace_text() {
        let code = "var sb = new StringBuilder();\n\
                    sb.Append($\"SELECT * FROM {table}\");";
        assert_eq!(extract_sql(code), vec!["SELECT * FROM {table}"]);
    }

    #[test]
    fn test_method_wrapped_builder_with_comments() {
        let code = "public string BuildQuery(bool includeDeleted)\n\
                    {\n\
                    \x20   // base projection\n\
                    \x20   var sb = new StringBuilder();\n\
                    \x20   sb.AppendLine(\"SELECT id, title\"); /* cols */\n\
                    \x20   sb.AppendLine(\"FROM posts\");\n\
                    \x20   if (includeDeleted)\n\
                    \x20   {\n\
                    \x20       sb.Append(\"WHERE 1=1\");\n\
                    \x20   }\n\
                    \x20   else\n\
                    \x20   {\n\
                    \x20       sb.Append(\"WHERE deleted_at IS NULL\");\n\
                    \x20   }\n\
                    \x20   return sb.ToString();\n\
                    }";
        assert_eq!(
            extract_sql(code),
            vec![
                "SELECT id, title\nFROM posts\nWHERE 1=1",
                "SELECT id, title\nFROM posts\nWHERE deleted_at IS NULL",
            ]
        );
    }
}

#[cfg(test)]
mod pipeline {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_result() {
        assert!(extract_sql("").is_empty());
    }

    #[test]
    fn test_input_without_query_code_yields_empty_result() {
        let code = "// just a comment\nint x = 1;\nConsole.WriteLine(x);";
        assert!(extract_sql(code).is_empty());
    }

    #[test]
    fn test_duplicate_across_groups_kept_once_at_first_position() {
        let code = "string q = \"SELECT 1\";\n\
                    var sb = new StringBuilder();\n\
                    sb.Append(\"SELECT 1\");";
        assert_eq!(extract_sql(code), vec!["SELECT 1"]);
    }

    #[test]
    fn test_assignment_group_precedes_accumulator_group() {
        let code = "var sb = new StringBuilder();\n\
                    sb.Append(\"FROM builder\");\n\
                    string q = \"FROM assignment\";";
        assert_eq!(extract_sql(code), vec!["FROM assignment", "FROM builder"]);
    }

    #[test]
    fn test_unbalanced_braces_fall_back_to_flat_merge() {
        let code = "}\n}\n\
                    var sb = new StringBuilder();\n\
                    sb.Append(\"SELECT \");\n\
                    sb.Append(\"1\");";
        assert_eq!(extract_sql(code), vec!["SELECT 1"]);
    }

    #[test]
    fn test_trailing_whitespace_tidied() {
        let code = "var sb = new StringBuilder();\n\
                    sb.AppendLine(\"SELECT * \");\n\
                    sb.Append(\"FROM t\");";
        assert_eq!(extract_sql(code), vec!["SELECT *\nFROM t"]);
    }
}
