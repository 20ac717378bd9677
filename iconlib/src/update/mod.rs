pub type InitCallback<E, U> = fn(Option<U>) -> Result<(), E>;
pub type DefaultCallback<E> = fn() -> Result<(), E>;
pub type StringCallback<E> = fn(String) -> Result<(), E>;
pub type SizeCallback<E, U> = fn(U) -> Result<(), E>;

/// Callbacks a front end registers to follow a run.
///
/// Every hook is optional; an unset hook makes the matching event a no-op.
#[derive(Debug)]
pub struct Updater<E, U: num::Unsigned = usize> {
    pub(crate) init_cb: Option<InitCallback<E, U>>,
    pub(crate) inc_cb: Option<SizeCallback<E, U>>,
    pub(crate) finish_cb: Option<DefaultCallback<E>>,

    pub(crate) on_msg_cb: Option<StringCallback<E>>,
    pub(crate) on_title_cb: Option<StringCallback<E>>,
}

impl<E, U: num::Unsigned> Default for Updater<E, U> {
    fn default() -> Self {
        Self {
            init_cb: Default::default(),
            inc_cb: Default::default(),
            finish_cb: Default::default(),
            on_msg_cb: Default::default(),
            on_title_cb: Default::default(),
        }
    }
}

impl<E, U: num::Unsigned> Updater<E, U> {
    pub fn on_init(&mut self, init_cb: Option<InitCallback<E, U>>) -> &mut Self {
        self.init_cb = init_cb;
        self
    }
    pub fn on_increment(&mut self, inc_cb: Option<SizeCallback<E, U>>) -> &mut Self {
        self.inc_cb = inc_cb;
        self
    }
    pub fn on_finish(&mut self, finish_cb: Option<DefaultCallback<E>>) -> &mut Self {
        self.finish_cb = finish_cb;
        self
    }
    pub fn on_message(&mut self, on_msg_cb: Option<StringCallback<E>>) -> &mut Self {
        self.on_msg_cb = on_msg_cb;
        self
    }
    /// Titles are lines that stay on screen once printed.
    pub fn on_title(&mut self, on_title_cb: Option<StringCallback<E>>) -> &mut Self {
        self.on_title_cb = on_title_cb;
        self
    }

    /// Start tracking `len` steps (unknown when `None`).
    pub fn init(&self, len: Option<U>) -> Result<(), E> {
        self.init_cb.map_or(Ok(()), |cb| cb(len))
    }
    pub fn increment(&self, n: U) -> Result<(), E> {
        self.inc_cb.map_or(Ok(()), |cb| cb(n))
    }
    pub fn finish(&self) -> Result<(), E> {
        self.finish_cb.map_or(Ok(()), |cb| cb())
    }
    pub fn set_message(&self, message: String) -> Result<(), E> {
        self.on_msg_cb.map_or(Ok(()), |cb| cb(message))
    }
    pub fn set_title(&self, title: String) -> Result<(), E> {
        self.on_title_cb.map_or(Ok(()), |cb| cb(title))
    }
}
