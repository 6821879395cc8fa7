mod pod;
