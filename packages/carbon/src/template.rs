use indoc::indoc;

/// Selects the trigger icon within the shadow root.
pub const SELECTOR_TRIGGER: &str = "#trigger";

pub const TEMPLATE: &str = indoc! {r#"
    <svg id="trigger" width="16" height="16" viewBox="0 0 16 16" xmlns="http://www.w3.org/2000/svg">
      <g fill-rule="evenodd">
        <path d="M8 14.5a6.5 6.5 0 1 0 0-13 6.5 6.5 0 0 0 0 13zM8 16A8 8 0 1 1 8 0a8 8 0 0 1 0 16z" fill-rule="nonzero" />
        <path fill-rule="nonzero" d="M9 13H7V7h2z" />
        <circle cx="8" cy="4" r="1" />
      </g>
    </svg>
    <slot></slot>
"#};
