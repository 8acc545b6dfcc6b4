//! Tag formatting and call-site tag derivation.

/// Longest tag logcat accepts.
pub const MAX_TAG_LENGTH: usize = 23;

/// Truncates `tag` to [`MAX_TAG_LENGTH`] characters. Shorter tags are returned as-is.
pub fn truncate(tag: &str) -> &str {
    match tag.char_indices().nth(MAX_TAG_LENGTH) {
        Some((idx, _)) => &tag[..idx],
        None => tag,
    }
}

/// Builds a `"<Owner>-<function>"` tag from a path such as
/// `my_app::net::Client::connect::{{closure}}::__mlog_site`.
///
/// The trailing marker and closure segments are skipped. `Owner` is the impl type
/// (also for trait impls such as `<Home as Screen>`), or the module for free functions.
pub fn from_function_path(path: &str) -> Option<String> {
    let segments = split_path(path);
    let mut segments = segments
        .iter()
        .rev()
        .skip(1)
        .filter(|segment| !segment.is_empty() && **segment != "{{closure}}");

    let function = segments.next()?;
    match segments.next() {
        Some(owner) => Some(format!("{}-{}", short_owner(owner), function)),
        None => Some(function.to_string()),
    }
}

/// Splits on `::` outside of angle brackets, so `<a::Home as a::Screen>` and
/// `Cache<alloc::string::String>` stay single segments.
fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let bytes = path.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(idx + 1) == Some(&b':') => {
                segments.push(&path[start..idx]);
                idx += 2;
                start = idx;
                continue;
            }
            _ => {}
        }
        idx += 1;
    }
    segments.push(&path[start..]);
    segments
}

/// Reduces an owner segment to a bare type name: `Cache<K, V>` becomes `Cache`,
/// `<app::Home as app::Screen>` becomes `Home`.
fn short_owner(owner: &str) -> &str {
    let owner = match owner.strip_prefix('<') {
        Some(qualified) => {
            let self_ty = qualified.split(" as ").next().unwrap_or(qualified);
            let self_ty = self_ty.trim_end_matches('>');
            split_path(self_ty).pop().unwrap_or(self_ty)
        }
        None => owner,
    };
    owner.split('<').next().unwrap_or(owner)
}

/// Expands to an `Option<String>` tag naming the enclosing function.
#[macro_export]
macro_rules! caller_tag {
    () => {{
        fn __mlog_site() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::tag::from_function_path(__type_name_of(__mlog_site))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Uploader;

    struct Home;

    trait Screen {
        fn show(&self) -> Option<String>;
    }

    impl Screen for Home {
        fn show(&self) -> Option<String> {
            caller_tag!()
        }
    }

    impl Uploader {
        fn tag(&self) -> Option<String> {
            caller_tag!()
        }

        fn tag_in_closure(&self) -> Option<String> {
            let derive = || caller_tag!();
            derive()
        }
    }

    #[test]
    fn test_truncate_long_tag() {
        let tag = "AbcdefghijklmnopqrstuvwxyzAbcdef";
        assert_eq!(truncate(tag), "Abcdefghijklmnopqrstuvw");
        assert_eq!(truncate(tag).chars().count(), 23);
    }

    #[test]
    fn test_truncate_keeps_short_tags() {
        assert_eq!(truncate("MainActivity"), "MainActivity");
        let exact = "x".repeat(23);
        assert_eq!(truncate(&exact), exact);
        assert_eq!(truncate(""), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        let tag = "ü".repeat(30);
        assert_eq!(truncate(&tag), "ü".repeat(23));
    }

    #[test]
    fn test_from_function_path() {
        assert_eq!(
            from_function_path("app::net::Client::connect::__mlog_site").as_deref(),
            Some("Client-connect")
        );
        assert_eq!(
            from_function_path("app::net::connect::{{closure}}::{{closure}}::__mlog_site").as_deref(),
            Some("net-connect")
        );
        assert_eq!(
            from_function_path("app::cache::Cache<K, V>::get::__mlog_site").as_deref(),
            Some("Cache-get")
        );
        assert_eq!(
            from_function_path("app::cache::Cache<alloc::string::String>::get::__mlog_site").as_deref(),
            Some("Cache-get")
        );
        assert_eq!(
            from_function_path("<app::ui::Home as app::ui::Screen>::show::__mlog_site").as_deref(),
            Some("Home-show")
        );
        assert_eq!(
            from_function_path("<app::ui::List<T> as app::ui::Screen>::show::__mlog_site").as_deref(),
            Some("List-show")
        );
        assert_eq!(from_function_path("main::__mlog_site").as_deref(), Some("main"));
        assert_eq!(from_function_path("__mlog_site"), None);
    }

    #[test]
    fn test_caller_tag_names_method() {
        assert_eq!(Uploader.tag().as_deref(), Some("Uploader-tag"));
        assert_eq!(Uploader.tag_in_closure().as_deref(), Some("Uploader-tag_in_closure"));
    }

    #[test]
    fn test_caller_tag_names_trait_impl_type() {
        assert_eq!(Home.show().as_deref(), Some("Home-show"));
    }

    #[test]
    fn test_caller_tag_names_free_function() {
        assert_eq!(caller_tag!().as_deref(), Some("tests-test_caller_tag_names_free_function"));
    }
}
