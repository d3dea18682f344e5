// @generated
// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod todo {
    pub mod v1 {
        include!("todo.v1.rs");
        // todo.v1.tonic.rs is auto-included by todo.v1.rs
    }
}
