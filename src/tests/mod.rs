#[cfg(test)]
mod formatting_tests {
    use crate::{
        dump_walk, dump_walk_default, pre_dump, Category, ChildClassifier, Composite, Member,
        ObjectRule, Param, Record, RenderFault, Signature, TreeRenderer, Value, MAX_DEPTH,
    };
    use chrono::{TimeZone, Utc};
    use std::rc::Rc;

    // Object whose members can never be read
    struct ClosedHandle;

    impl Composite for ClosedHandle {
        fn type_name(&self) -> &str {
            "ClosedHandle"
        }

        fn members(&self) -> Result<Vec<Member>, RenderFault> {
            Err(RenderFault::custom("handle is closed"))
        }
    }

    fn create_user() -> Rc<Record> {
        Rc::new(
            Record::new("User")
                .with_member(Member::private("id", 7))
                .with_member(Member::protected("email", "a@example.com"))
                .with_member(Member::public("active", true))
                .with_member(Member::public("instances", 3).class_level())
                .with_member(Member::private("registry", Value::Null).class_level()),
        )
    }

    #[test]
    fn test_root_leaves() {
        assert_eq!(dump_walk_default(&Value::Int(42)), "Root (integer) 42");
        assert_eq!(dump_walk_default(&Value::from("hi")), "Root (string) 'hi'");
        assert_eq!(dump_walk_default(&Value::Float(0.5)), "Root (double) 0.5");
        assert_eq!(dump_walk_default(&Value::Bool(true)), "Root (boolean) true");
        assert_eq!(dump_walk_default(&Value::Null), "Root (NULL) NULL");
    }

    #[test]
    fn test_keyed_mapping_with_two_space_indent() {
        let value = Value::map([("a", Value::from(1)), ("b", Value::list([2, 3]))]);

        let expected = "\
Root array(2)
  ['a'] => (integer) 1
  ['b'] => array (2)
    [0] => (integer) 2
    [1] => (integer) 3
";
        assert_eq!(dump_walk(&value, "  "), expected);
    }

    #[test]
    fn test_sequence_has_one_line_per_entry() {
        let value = Value::list(["x", "y", "z", "w"]);
        let output = dump_walk_default(&value);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Root array(4)");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "    [3] => (string) 'w'");
    }

    #[test]
    fn test_leaf_entry_forms() {
        let value = Value::list([
            Value::Bool(false),
            Value::Null,
            Value::Float(1.0),
            Value::from(""),
            Value::list(Vec::<Value>::new()),
        ]);

        let expected = "\
Root array(5)
    [0] => (boolean) false
    [1] => (NULL) NULL
    [2] => (double) 1
    [3] => (string) ''
    [4] => array (0)
";
        assert_eq!(dump_walk_default(&value), expected);
    }

    #[test]
    fn test_object_members_with_visibility_tags() {
        let expected = "\
Root object User
    -> <priv> id = (integer) 7
    -> <prot> email = (string) 'a@example.com'
    -> <publ> active = (boolean) true
    -> <publ:stat> instances = (integer) 3
    -> <priv:stat> registry = (NULL) NULL
";
        assert_eq!(dump_walk_default(&Value::from(create_user())), expected);
    }

    #[test]
    fn test_nested_object_inside_sequence() {
        let value = Value::map([("owner", Value::from(create_user()))]);
        let output = dump_walk(&value, "\t");

        assert!(output.starts_with("Root array(1)\n\t['owner'] => object User\n"));
        assert!(output.contains("\n\t\t-> <priv> id = (integer) 7\n"));
    }

    #[test]
    fn test_self_reference_is_cut_short() {
        let node = Rc::new(Record::new("Node").with_member(Member::public("name", "a")));
        node.push(Member::public("next", Value::from(node.clone())));

        let expected = "\
Root object Node
    -> <publ> name = (string) 'a'
    -> <publ> next = object Node
        (...)
";
        assert_eq!(dump_walk_default(&Value::from(node)), expected);
    }

    #[test]
    fn test_two_object_cycle() {
        let parent = Rc::new(Record::new("Parent"));
        let child = Rc::new(Record::new("Child"));
        parent.push(Member::public("child", Value::from(child.clone())));
        child.push(Member::private("parent", Value::from(parent.clone())));

        let output = dump_walk(&Value::list([Value::from(parent)]), "  ");
        let expected = "\
Root array(1)
  [0] => object Parent
    -> <publ> child = object Child
      -> <priv> parent = object Parent
        (...)
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_shared_object_in_sibling_branches_expands_twice() {
        let shared = Rc::new(Record::new("Shared").with_member(Member::public("n", 1)));
        let value = Value::list([Value::from(shared.clone()), Value::from(shared)]);

        let output = dump_walk(&value, "  ");
        assert_eq!(output.matches("-> <publ> n = (integer) 1").count(), 2);
        assert!(!output.contains("(...)"));
    }

    #[test]
    fn test_member_fault_is_contained() {
        let value = Value::list([
            Value::from(1),
            Value::from(Rc::new(ClosedHandle)),
            Value::from(2),
        ]);

        let expected = "\
Root array(3)
    [0] => (integer) 1
    [1] => object ClosedHandle
        dump_walk() error: handle is closed
    [2] => (integer) 2
";
        assert_eq!(dump_walk_default(&value), expected);
    }

    #[test]
    fn test_root_fault_keeps_header() {
        let output = dump_walk(&Value::from(Rc::new(ClosedHandle)), "  ");
        assert_eq!(
            output,
            "Root object ClosedHandle\n  dump_walk() error: handle is closed\n"
        );
    }

    #[test]
    fn test_depth_limit_reports_fault() {
        let mut value = Value::from(0);
        for _ in 0..MAX_DEPTH + 10 {
            value = Value::list([value]);
        }

        let output = dump_walk(&value, "");
        assert!(output.starts_with("Root array(1)\n"));
        assert!(output.contains(&format!(
            "dump_walk() error: maximum depth of {} exceeded\n",
            MAX_DEPTH
        )));
        assert!(!output.contains("(integer) 0"));
    }

    #[test]
    fn test_inline_objects() {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let callback = Signature::new(vec![
            Param::new("row").typed("array").by_reference(),
            Param::new("limit").typed("int").with_default(10),
        ]);
        let value = Value::map([
            ("created", Value::from(created)),
            ("conn", Value::from(Rc::new(Record::new("Mysql").with_category(Category::Connection)))),
            ("rows", Value::from(Rc::new(Record::new("Rows").with_category(Category::ResultSet)))),
            ("stmt", Value::from(Rc::new(Record::new("Stmt").with_category(Category::PreparedStatement)))),
            ("db", Value::from(Rc::new(Record::new("Db").with_category(Category::DatabaseHandle)))),
            ("callback", Value::from(callback)),
        ]);

        let expected = "\
Root array(6)
    ['created'] => object DateTime '2024-01-15 4:00:00 am PST'
    ['conn'] => object Mysql
    ['rows'] => object ResultSet
    ['stmt'] => PreparedStatement (prepared statement)
    ['db'] => Database (database handle)
    ['callback'] => closure (array &$row, int $limit? = 10)
";
        assert_eq!(dump_walk_default(&value), expected);
    }

    #[test]
    fn test_custom_classifier_rules() {
        let session = Rc::new(Record::new("Session").with_member(Member::private("token", "s3cr3t")));
        let renderer = TreeRenderer::new(
            ChildClassifier::new().with_type_rule("Session", ObjectRule::Label("Session (hidden)".into())),
        );

        let output = renderer.render(&Value::map([("session", Value::from(session))]), "  ");
        assert_eq!(output, "Root array(1)\n  ['session'] => Session (hidden)\n");
    }

    #[test]
    fn test_root_object_always_expands() {
        let stmt = Rc::new(
            Record::new("Stmt")
                .with_category(Category::PreparedStatement)
                .with_member(Member::public("query", "SELECT 1")),
        );

        assert_eq!(
            dump_walk(&Value::from(stmt), "  "),
            "Root object Stmt\n  -> <publ> query = (string) 'SELECT 1'\n"
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let node = Rc::new(Record::new("Node"));
        node.push(Member::public("self_ref", Value::from(node.clone())));
        let value = Value::from(node);

        assert_eq!(dump_walk_default(&value), dump_walk_default(&value));
    }

    #[test]
    fn test_pre_dump_matches_escaped_dump() {
        let value = Value::map([("html", "<p class=\"x\">Tom & 'Jerry'</p>")]);
        let dump = dump_walk_default(&value);
        let html = pre_dump(&value);

        assert!(html.starts_with("<div style='background: white;border:3px grey solid;'><div></div><pre>"));
        assert!(html.ends_with("</pre></div>"));
        assert!(html.contains("&lt;p class=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/p&gt;"));
        assert!(!html.contains(&dump));
    }
}
