mod proptest_encoding;
