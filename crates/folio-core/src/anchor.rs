/// Resolves the selector an in-page link should scroll to.
///
/// Returns `None` for anything that is not a same-page fragment, and
/// for the bare `#` placeholder, so the browser keeps its default.
pub fn fragment_target(
  href: Option<&str>
) -> Option<&str> {
  let href = href?;
  if !href.starts_with('#') || href == "#"
  {
    return None;
  }
  Some(href)
}
