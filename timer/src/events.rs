use soroban_sdk::{Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }

    pub fn set_current_time(&self, time: u64) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "set_current_time"),), (time,))
    }
}
