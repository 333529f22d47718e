use typedstruct::typed_struct;

typed_struct! {
    struct Point {
        field(x, i64);
        field(x, i64);
    }
}

fn main() {}
