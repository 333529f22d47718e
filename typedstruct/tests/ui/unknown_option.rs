use typedstruct::typed_struct;

typed_struct! {
    struct Counter {
        field(x, u8, defualt = 1);
    }
}

fn main() {}
