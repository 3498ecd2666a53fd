pub mod short_code;

pub use short_code::{
    CodeGenerator, RandomBase36, build_generated_link, generate_short_code, is_base36_code,
};
