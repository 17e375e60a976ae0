#![no_std]
extern crate alloc;

#[cfg(test)]
mod test {
    use alloc::vec;
    use argtable::ArgumentTable;

    #[test]
    fn test() {
        let mut table = ArgumentTable::parse(vec!["prog", "--arg=3", "-noverbose"], true);
        table.merge_config("verbose=1\nlevel=2");
        assert_eq!(3, table.get_arg("-arg", 0));
        assert_eq!(false, table.get_bool_arg("-verbose", true));
        assert_eq!(2, table.get_arg("-level", 0));
    }
}
