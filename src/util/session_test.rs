use super::*;

#[test]
fn bearer_header_prefixes_scheme() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn read_token_is_none_outside_browser() {
    assert_eq!(read_token(), None);
}
