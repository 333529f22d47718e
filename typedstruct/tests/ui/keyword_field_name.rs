use typedstruct::typed_struct;

typed_struct! {
    struct Token {
        field(type, u8);
    }
}

fn main() {}
