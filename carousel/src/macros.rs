// All log lines go through `clog!`, which owns the `carousel` target and the `tracing` gate.

#[cfg(feature = "tracing")]
macro_rules! clog {
    ($level:ident, $($field:tt)*) => {
        tracing::$level!(target: "carousel", $($field)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! clog {
    ($level:ident, $($field:tt)*) => {};
}

/// Per-item or per-step detail: wrap shifts, snap targets, settling.
macro_rules! ctrace {
    ($($field:tt)*) => {
        clog!(trace, $($field)*)
    };
}

/// Once-per-panel events such as construction.
macro_rules! cdebug {
    ($($field:tt)*) => {
        clog!(debug, $($field)*)
    };
}

/// Configuration problems the panel recovered from.
macro_rules! cwarn {
    ($($field:tt)*) => {
        clog!(warn, $($field)*)
    };
}
