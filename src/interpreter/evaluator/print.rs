use crate::interpreter::{evaluator::core::Context, value::Value};

impl Context {
    /// Records the rendered form of `value` as one line of output.
    ///
    /// Integers render as decimal digits and text as its raw content. In echo
    /// mode the line is also written to standard output immediately.
    ///
    /// # Example
    /// ```
    /// use simplelang::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.print(&Value::Integer(42));
    /// context.print(&Value::from("done"));
    ///
    /// assert_eq!(context.output(), ["42", "done"]);
    /// ```
    pub fn print(&mut self, value: &Value) {
        let line = value.to_string();
        if self.echo {
            println!("{line}");
        }
        self.output.push(line);
    }
}
