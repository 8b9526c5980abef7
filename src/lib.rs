//! Reverse-mode automatic differentiation over dynamically built scalar graphs.
//!
//! ```
//! use tapegrad::prelude::*;
//!
//! let x = Var::new(3.0);
//! let z = &x * &x + &x;
//! let [dx] = z.derivative([&x]);
//! assert_eq!(dx, 7.0);
//! ```

pub use tapegrad_internal::*;
