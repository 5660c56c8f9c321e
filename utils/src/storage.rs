// Instance storage accessor generators.
//
// Calling modules must have `paste::paste`, `soroban_sdk::{panic_with_error, Env}`,
// `utils::bump::bump_instance` and `utils::storage_errors::StorageError` in scope.

#[macro_export]
macro_rules! generate_instance_storage_setter {
    ($vis:vis $attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            $vis fn [<set_ $attr_name>](e: &Env, $attr_name: &$data_type) {
                bump_instance(e);
                e.storage()
                    .instance()
                    .set(&$key, $attr_name)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter {
    ($vis:vis $attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            $vis fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                match e.storage().instance().get(&$key) {
                    Some(value) => value,
                    None => panic_with_error!(e, StorageError::ValueNotInitialized),
                }
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_with_default {
    ($vis:vis $attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        paste! {
            $vis fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                e.storage().instance().get(&$key).unwrap_or($default)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter {
    ($vis:vis $attr_name:ident, $key:expr, $data_type:ty) => {
        $crate::generate_instance_storage_getter!($vis $attr_name, $key, $data_type);
        $crate::generate_instance_storage_setter!($vis $attr_name, $key, $data_type);
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter_with_default {
    ($vis:vis $attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        $crate::generate_instance_storage_getter_with_default!($vis $attr_name, $key, $data_type, $default);
        $crate::generate_instance_storage_setter!($vis $attr_name, $key, $data_type);
    };
}
