//! Asset custody collaborator. The collection contract is external; it is
//! only expected to expose `transfer(from, to, item)` and
//! `owner_of(item)`, failing atomically when the caller lacks
//! authorization.

use soroban_sdk::{vec, Address, Env, IntoVal, Symbol, Val, Vec};

pub fn transfer(env: &Env, collection: &Address, from: &Address, to: &Address, item: u64) {
    let args: Vec<Val> = vec![
        env,
        from.into_val(env),
        to.into_val(env),
        item.into_val(env),
    ];
    env.invoke_contract::<()>(collection, &Symbol::new(env, "transfer"), args);
}

pub fn owner_of(env: &Env, collection: &Address, item: u64) -> Address {
    let args: Vec<Val> = vec![env, item.into_val(env)];
    env.invoke_contract(collection, &Symbol::new(env, "owner_of"), args)
}
