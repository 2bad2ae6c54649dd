//! Base stylesheet injected by [`WoobatProvider`](crate::WoobatProvider).
//!
//! Per-instance colors and sizes are inline styles derived in `woobat_runtime::appearance`;
//! this sheet only carries layout, states and keyframes keyed on the `data-ui-*` contract.

/// Layout, state and animation rules shared by every component.
pub const COMPONENT_CSS: &str = r#"
@keyframes wb-spin {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

.wb-icon { display: inline-flex; align-items: center; justify-content: center; flex-shrink: 0; }
.wb-icon[data-ui-spin="true"] { animation: wb-spin 1s linear infinite; }

.wb-btn {
  display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem;
  border: 1px solid transparent; cursor: pointer; font-weight: 500; line-height: 1;
  transition: background-color 0.2s, box-shadow 0.2s, opacity 0.2s;
  user-select: none; white-space: nowrap;
}
.wb-btn[data-ui-block="true"] { display: flex; width: 100%; }
.wb-btn[data-ui-disabled="true"], .wb-btn[data-ui-loading="true"] { cursor: not-allowed; opacity: 0.6; }
.wb-btn__content[data-ui-hidden="true"] { visibility: hidden; }
.wb-btn__spinner { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; }

.wb-alert { display: flex; gap: 0.75rem; padding: 1rem; border-radius: 0.5rem; align-items: flex-start; }
.wb-alert__body { flex: 1; min-width: 0; }
.wb-alert__title { font-weight: 600; margin-bottom: 0.25rem; }
.wb-alert__close { background: none; border: none; cursor: pointer; color: inherit; padding: 0; }

.wb-avatar {
  display: inline-flex; align-items: center; justify-content: center; overflow: hidden;
  font-weight: 600; flex-shrink: 0;
}
.wb-avatar img { width: 100%; height: 100%; object-fit: cover; }

.wb-badge { position: relative; display: inline-flex; }
.wb-badge__content {
  position: absolute; top: 0; right: 0; transform: translate(50%, -50%);
  min-width: 1.25rem; height: 1.25rem; padding: 0 0.375rem; border-radius: 9999px;
  display: inline-flex; align-items: center; justify-content: center;
  font-size: 0.75rem; font-weight: 600; color: #ffffff;
}
.wb-badge__content[data-ui-dot="true"] { min-width: 0.5rem; width: 0.5rem; height: 0.5rem; padding: 0; }
.wb-badge[data-ui-inline="true"] .wb-badge__content { position: static; transform: none; margin-left: 0.25rem; }

.wb-chip { display: inline-flex; align-items: center; border: 1px solid transparent; white-space: nowrap; }
.wb-chip__close { background: none; border: none; cursor: pointer; color: inherit; padding: 0; display: inline-flex; }

.wb-checkbox { display: inline-flex; flex-direction: column; gap: 0.25rem; }
.wb-checkbox__row { display: inline-flex; align-items: center; gap: 0.5rem; cursor: pointer; }
.wb-checkbox[data-ui-disabled="true"] .wb-checkbox__row { cursor: not-allowed; opacity: 0.6; }
.wb-checkbox__box {
  width: 1.125rem; height: 1.125rem; border: 2px solid currentColor; border-radius: 0.25rem;
  display: inline-flex; align-items: center; justify-content: center; color: #ffffff;
}
.wb-checkbox__input { position: absolute; opacity: 0; width: 0; height: 0; }
.wb-checkbox__error { color: #ef4444; font-size: 0.75rem; }

[data-wb-theme="dark"] .wb-alert__close, [data-wb-theme="dark"] .wb-chip__close { opacity: 0.85; }
"#;
