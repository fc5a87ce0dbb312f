mod clipboard;
mod contact;
mod cursor;
mod dom;
mod filter;
mod guard;
mod menu;
mod notifier;
mod page;
mod scroll;
mod theme;
mod tilt;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting portfolio page behaviors"
  );

  let Some(window) = web_sys::window() else {
    tracing::error!("no window; nothing to mount");
    return;
  };
  let Some(document) = window.document()
  else {
    tracing::error!(
      "no document; nothing to mount"
    );
    return;
  };

  page::install(page::Page::mount(
    &window, &document
  ));
}
