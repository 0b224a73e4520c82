/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging macros
//!
//! With the `log` feature these are the macros of the `log` crate,
//! without it they expand to nothing (their arguments are still
//! type checked so that toggling the feature never changes what compiles).

#[cfg(feature = "log")]
pub use ::log::{debug, error, info, trace, warn};

// #[macro_export] is required to make macros works across crates
// but it always put the macro in the crate root.
// #[doc(hidden)] + "pub use" is a workaround to namespace a macro.
#[cfg(not(feature = "log"))]
pub use crate::{__debug as debug, __error as error, __info as info, __trace as trace, __warn as warn};

#[doc(hidden)]
#[macro_export]
macro_rules! __ignore_log {
    ($($arg:tt)+) => {
        if false {
            ::core::mem::drop(::core::format_args!($($arg)+));
        }
    };
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __error {
    ($($arg:tt)+) => {
        $crate::__ignore_log!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __warn {
    ($($arg:tt)+) => {
        $crate::__ignore_log!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __info {
    ($($arg:tt)+) => {
        $crate::__ignore_log!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __debug {
    ($($arg:tt)+) => {
        $crate::__ignore_log!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __trace {
    ($($arg:tt)+) => {
        $crate::__ignore_log!($($arg)+)
    };
}
