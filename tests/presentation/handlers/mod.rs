mod login_test;
